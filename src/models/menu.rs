use serde::{Deserialize, Serialize};

use crate::utils::constants::CDN_URL;

/// One catalog entry. The catalog is fixed at compile time and never mutated.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Unit price in whole rubles.
    pub price: u32,
    pub weight: String,
    pub image: String,
    #[serde(default)]
    pub is_popular: bool,
}

/// The full menu, in display order.
pub fn full_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: 1,
            name: "Шашлык из свинины".into(),
            description: "Сочное мясо, маринованное по классическому рецепту".into(),
            price: 450,
            weight: "300г".into(),
            image: photo("9df55331-9399-4c38-b07b-baada925e3bc.jpg"),
            is_popular: true,
        },
        MenuItem {
            id: 2,
            name: "Шашлык из курицы".into(),
            description: "Нежная куриная грудка с пряными травами".into(),
            price: 350,
            weight: "300г".into(),
            image: photo("771374b5-b1ec-4ece-8266-93176d67c79d.jpg"),
            is_popular: true,
        },
        MenuItem {
            id: 3,
            name: "Шашлык из баранины".into(),
            description: "Традиционный восточный шашлык с луком".into(),
            price: 550,
            weight: "300г".into(),
            image: photo("6fc3596f-e887-467e-8886-ddb5f52d426c.jpg"),
            is_popular: false,
        },
        MenuItem {
            id: 4,
            name: "Люля-кебаб".into(),
            description: "Рубленое мясо с ароматными специями".into(),
            price: 380,
            weight: "250г".into(),
            image: photo("9df55331-9399-4c38-b07b-baada925e3bc.jpg"),
            is_popular: true,
        },
        MenuItem {
            id: 5,
            name: "Шашлык из говядины".into(),
            description: "Отборная мраморная говядина".into(),
            price: 520,
            weight: "300г".into(),
            image: photo("771374b5-b1ec-4ece-8266-93176d67c79d.jpg"),
            is_popular: false,
        },
        MenuItem {
            id: 6,
            name: "Овощи на мангале".into(),
            description: "Микс из свежих овощей гриль".into(),
            price: 250,
            weight: "200г".into(),
            image: "/placeholder.svg".into(),
            is_popular: false,
        },
    ]
}

fn photo(file: &str) -> String {
    format!("{}/{}", CDN_URL, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_six_items_with_unique_ids() {
        let menu = full_menu();
        assert_eq!(menu.len(), 6);

        let ids: HashSet<u32> = menu.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), menu.len());
    }

    #[test]
    fn catalog_prices_are_positive() {
        for item in full_menu() {
            assert!(item.price > 0, "{} has no price", item.name);
        }
    }

    #[test]
    fn catalog_photos_resolve_against_cdn() {
        let menu = full_menu();
        assert!(menu[0].image.starts_with(CDN_URL));
        // The grill vegetables still use the placeholder shot.
        assert_eq!(menu[5].image, "/placeholder.svg");
    }
}
