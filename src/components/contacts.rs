use yew::prelude::*;

use crate::components::icon::Icon;
use crate::utils::constants::{
    CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, CONTACT_PHONE_HREF, WORKING_HOURS,
};

#[function_component(ContactsSection)]
pub fn contacts_section() -> Html {
    let mailto = format!("mailto:{}", CONTACT_EMAIL);

    html! {
        <section id="contacts" class="contacts-section">
            <h2>{"Контакты"}</h2>
            <div class="contacts-list">
                <div class="contact-row">
                    <Icon name="Phone" size={24} />
                    <a href={CONTACT_PHONE_HREF}>{ CONTACT_PHONE }</a>
                </div>
                <div class="contact-row">
                    <Icon name="Mail" size={24} />
                    <a href={mailto}>{ CONTACT_EMAIL }</a>
                </div>
                <div class="contact-row">
                    <Icon name="MapPin" size={24} />
                    <span>{ CONTACT_ADDRESS }</span>
                </div>
                <div class="contact-row">
                    <Icon name="Clock" size={24} />
                    <span>{ WORKING_HOURS }</span>
                </div>
            </div>
        </section>
    }
}
