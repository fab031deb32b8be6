use crate::tender::view::TenderSearchPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <TenderSearchPage />
    }
}
