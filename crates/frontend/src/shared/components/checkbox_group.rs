use std::collections::BTreeSet;

use leptos::prelude::*;

/// Группа чекбоксов по статическому словарю (код, подпись)
/// с кнопками "выбрать все" / "снять все".
#[component]
pub fn CheckboxGroup(
    /// Заголовок группы
    legend: &'static str,
    /// Элементы словаря: (код для запроса, подпись)
    items: &'static [(&'static str, &'static str)],
    /// Множество выбранных кодов
    selected: RwSignal<BTreeSet<String>>,
) -> impl IntoView {
    let select_all = move |_| {
        selected.set(items.iter().map(|(code, _)| code.to_string()).collect());
    };
    let deselect_all = move |_| {
        selected.set(BTreeSet::new());
    };

    view! {
        <fieldset style="margin: 15px 0; padding: 15px; border: 1px solid #ddd; border-radius: 4px;">
            <legend style="font-weight: bold; padding: 0 8px;">{legend}</legend>

            <div style="margin-bottom: 10px;">
                <button
                    type="button"
                    style="margin-right: 8px; padding: 3px 10px; font-size: 12px; cursor: pointer;"
                    on:click=select_all
                >
                    "Выбрать все"
                </button>
                <button
                    type="button"
                    style="padding: 3px 10px; font-size: 12px; cursor: pointer;"
                    on:click=deselect_all
                >
                    "Снять все"
                </button>
            </div>

            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 5px;">
                {items
                    .iter()
                    .map(|(code, label)| {
                        let code = *code;
                        view! {
                            <label style="font-size: 14px; cursor: pointer;">
                                <input
                                    type="checkbox"
                                    value=code
                                    prop:checked=move || selected.get().contains(code)
                                    on:change=move |ev| {
                                        selected.update(|set| {
                                            if event_target_checked(&ev) {
                                                set.insert(code.to_string());
                                            } else {
                                                set.remove(code);
                                            }
                                        });
                                    }
                                />
                                " "
                                {*label}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </fieldset>
    }
}
