use crate::domain::a001_item_type::ui::list::ItemTypesList;
use crate::domain::a002_item::ui::list::ItemsList;
use crate::domain::a003_category::ui::list::CategoriesList;
use crate::domain::a004_family::ui::list::FamiliesList;
use crate::domain::a005_attribute_group::ui::list::AttributeGroupsList;
use crate::domain::a006_association::ui::list::AssociationsList;
use crate::domain::a007_localization::ui::list::LocalizationsList;
use crate::layout::left::Navbar;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Страница не найдена"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell
                left=|| view! { <Navbar /> }.into_any()
                center=|| view! {
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=ItemsList />
                        <Route path=path!("/item-types") view=ItemTypesList />
                        <Route path=path!("/items") view=ItemsList />
                        <Route path=path!("/categories") view=CategoriesList />
                        <Route path=path!("/families") view=FamiliesList />
                        <Route path=path!("/attribute-groups") view=AttributeGroupsList />
                        <Route path=path!("/associations") view=AssociationsList />
                        <Route path=path!("/localizations") view=LocalizationsList />
                    </Routes>
                }.into_any()
            />
        </Router>
    }
}
