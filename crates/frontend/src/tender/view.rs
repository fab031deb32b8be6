use std::collections::BTreeSet;

use contracts::tender::{Category, ProcurementType};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::dictionaries::{FEDERAL_DISTRICTS, KLADR_REGIONS};
use super::form_state::{procurement_hint, submit_caption, CategoryInput, FormSnapshot};
use super::results::{SearchOutcome, SearchResultsView};
use crate::shared::components::CheckboxGroup;

/// Сигналы одной категории: переключатель и поле минимальной цены
#[derive(Clone, Copy)]
struct CategoryControls {
    category: Category,
    state: RwSignal<CategoryInput>,
}

#[component]
fn CategoryRow(controls: CategoryControls) -> impl IntoView {
    let state = controls.state;
    let title = controls.category.title();

    view! {
        <div style="display: flex; align-items: center; gap: 10px; margin: 8px 0;">
            <label style="flex: 0 0 280px; cursor: pointer;">
                <input
                    type="checkbox"
                    prop:checked=move || state.get().enabled
                    on:change=move |ev| {
                        state.update(|s| s.set_enabled(event_target_checked(&ev)));
                    }
                />
                " "
                {title}
            </label>
            <input
                type="number"
                min="0"
                placeholder="Мин. цена, руб."
                style="width: 160px; padding: 4px 8px;"
                prop:value=move || state.get().price_text
                prop:disabled=move || !state.get().enabled
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.price_text = value);
                }
            />
        </div>
    }
}

#[component]
pub fn TenderSearchPage() -> impl IntoView {
    let controls: [CategoryControls; 4] = Category::ALL.map(|category| CategoryControls {
        category,
        state: RwSignal::new(CategoryInput::default()),
    });

    let procurement_type = RwSignal::new(ProcurementType::default());
    let customer_places = RwSignal::new(BTreeSet::<String>::new());
    let kladr_ids = RwSignal::new(BTreeSet::<String>::new());

    let (is_loading, set_is_loading) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (outcome, set_outcome) = signal(Option::<SearchOutcome>::None);

    // Быстрое заполнение порогов цен во всех категориях
    let set_all_prices = move |amount: &'static str| {
        for c in controls {
            c.state.update(|s| s.price_text = amount.to_string());
        }
    };

    let on_submit = move |_| {
        if is_loading.get() {
            return;
        }
        set_error_message.set(None);
        set_outcome.set(None);
        set_is_loading.set(true);

        // Снимок формы строго в момент отправки
        let [vent, doors, build, metal] = controls.map(|c| c.state.get());
        let snapshot = FormSnapshot {
            ventilation: vent,
            doors,
            construction: build,
            metal,
            procurement_type: procurement_type.get(),
            customer_places: customer_places.get(),
            kladr_ids: kladr_ids.get(),
        };
        let request = snapshot.to_request();
        log::info!(
            "searching tenders: {} categories, type={:?}",
            request.selected_categories().len(),
            request.procurement_type
        );

        spawn_local(async move {
            match api::search_tenders(&request).await {
                Ok(response) => {
                    if let Some(message) = response.error_message() {
                        set_error_message.set(Some(message));
                    } else {
                        set_outcome.set(Some(SearchOutcome { request, response }));
                    }
                }
                Err(e) => {
                    log::warn!("search request failed: {}", e);
                    set_error_message.set(Some(format!("Ошибка сети: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div style="max-width: 900px; margin: 20px auto; padding: 20px; border: 1px solid #ccc; border-radius: 8px; font-family: sans-serif;">
            <h2>"Поиск закупок"</h2>

            <div style="margin: 15px 0;">
                <h3 style="font-weight: bold; margin-bottom: 8px;">"Категории"</h3>
                {controls
                    .into_iter()
                    .map(|c| view! { <CategoryRow controls=c /> })
                    .collect_view()}

                <div style="margin-top: 10px; font-size: 13px; color: #666;">
                    "Минимальная цена для всех категорий: "
                    <button type="button" style="margin: 0 3px; cursor: pointer;" on:click=move |_| set_all_prices("100000")>"100 000"</button>
                    <button type="button" style="margin: 0 3px; cursor: pointer;" on:click=move |_| set_all_prices("500000")>"500 000"</button>
                    <button type="button" style="margin: 0 3px; cursor: pointer;" on:click=move |_| set_all_prices("1000000")>"1 000 000"</button>
                    <button type="button" style="margin: 0 3px; cursor: pointer;" on:click=move |_| set_all_prices("")>"Очистить"</button>
                </div>
            </div>

            <div style="margin: 15px 0;">
                <h3 style="font-weight: bold; margin-bottom: 8px;">"Тип закупок"</h3>
                <label style="margin-right: 15px; cursor: pointer;">
                    <input
                        type="radio"
                        name="procurement_type"
                        value="active"
                        prop:checked=move || procurement_type.get() == ProcurementType::Active
                        on:change=move |_| procurement_type.set(ProcurementType::Active)
                    />
                    " Активные"
                </label>
                <label style="cursor: pointer;">
                    <input
                        type="radio"
                        name="procurement_type"
                        value="completed"
                        prop:checked=move || procurement_type.get() == ProcurementType::Completed
                        on:change=move |_| procurement_type.set(ProcurementType::Completed)
                    />
                    " Завершённые"
                </label>
                <div style="margin-top: 5px; font-size: 13px; color: #666;">
                    <span style:display=move || {
                        if procurement_type.get() == ProcurementType::Active { "inline" } else { "none" }
                    }>
                        {procurement_hint(ProcurementType::Active)}
                    </span>
                    <span style:display=move || {
                        if procurement_type.get() == ProcurementType::Completed { "inline" } else { "none" }
                    }>
                        {procurement_hint(ProcurementType::Completed)}
                    </span>
                </div>
            </div>

            <CheckboxGroup
                legend="Федеральные округа заказчика"
                items=FEDERAL_DISTRICTS
                selected=customer_places
            />
            <CheckboxGroup
                legend="Регионы поставки"
                items=KLADR_REGIONS
                selected=kladr_ids
            />

            <div style="margin: 20px 0;">
                <button
                    style="padding: 10px 20px; background: #007bff; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 16px;"
                    prop:disabled=move || is_loading.get()
                    on:click=on_submit
                >
                    {move || {
                        if is_loading.get() {
                            "Идёт поиск..."
                        } else {
                            submit_caption(procurement_type.get())
                        }
                    }}
                </button>
            </div>

            <Show when=move || is_loading.get()>
                <div style="padding: 10px; color: #007bff;">
                    "Выполняется поиск по площадкам, это может занять несколько минут..."
                </div>
            </Show>

            {move || {
                error_message.get().map(|message| view! {
                    <div style="padding: 10px; background: #fee; border: 1px solid #fcc; border-radius: 4px; color: #c00; margin: 10px 0;">
                        {message}
                    </div>
                })
            }}

            {move || {
                outcome.get().map(|o| view! { <SearchResultsView outcome=o /> })
            }}
        </div>
    }
}
