use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// (href, заголовок, иконка)
const MENU: &[(&str, &str, &str)] = &[
    ("/item-types", "Типы товаров", "item-types"),
    ("/items", "Товары", "items"),
    ("/categories", "Категории", "categories"),
    ("/families", "Семейства", "families"),
    ("/attribute-groups", "Группы атрибутов", "attribute-groups"),
    ("/associations", "Типы связей", "associations"),
    ("/localizations", "Локализация", "localizations"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <div class="main-nav-bar__group">"Справочники"</div>
            <ul>
                {MENU.iter().map(|(href, title, kind)| {
                    view! {
                        <li>
                            <A href=*href>
                                {icon(kind)}
                                <span>{*title}</span>
                            </A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
