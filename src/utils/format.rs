/// Display form of a ruble amount, e.g. "450 ₽".
pub fn format_price(amount: u32) -> String {
    format!("{} ₽", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_carries_the_ruble_sign() {
        assert_eq!(format_price(450), "450 ₽");
        assert_eq!(format_price(0), "0 ₽");
        assert_eq!(format_price(1250), "1250 ₽");
    }
}
