//! Чистая логика формы поиска: снимок состояния и его развёртка
//! в SearchRequest. Всё, что можно проверить без браузера, живёт здесь.

use std::collections::BTreeSet;

use contracts::tender::{CategorySelection, ProcurementType, SearchRequest};

/// Состояние одной категории в форме: переключатель и текст поля цены
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryInput {
    pub enabled: bool,
    pub price_text: String,
}

impl CategoryInput {
    /// Переключение категории; выключение очищает поле цены
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.price_text.clear();
        }
    }

    fn selection(&self) -> CategorySelection {
        CategorySelection {
            enabled: self.enabled,
            min_price: parse_min_price(&self.price_text),
        }
    }
}

/// Снимок формы, снятый в момент нажатия кнопки поиска
#[derive(Debug, Clone, Default)]
pub struct FormSnapshot {
    pub ventilation: CategoryInput,
    pub doors: CategoryInput,
    pub construction: CategoryInput,
    pub metal: CategoryInput,
    pub procurement_type: ProcurementType,
    pub customer_places: BTreeSet<String>,
    pub kladr_ids: BTreeSet<String>,
}

impl FormSnapshot {
    pub fn to_request(&self) -> SearchRequest {
        SearchRequest {
            ventilation: self.ventilation.selection(),
            doors: self.doors.selection(),
            construction: self.construction.selection(),
            metal: self.metal.selection(),
            procurement_type: self.procurement_type,
            customer_places: self.customer_places.iter().cloned().collect(),
            kladr_ids: self.kladr_ids.iter().cloned().collect(),
        }
    }
}

/// Разбор поля цены: допускает пробелы-разделители и запятую
/// в качестве десятичного знака ("1 500 000", "100000,50")
pub fn parse_min_price(text: &str) -> Option<f64> {
    let normalized: String = text
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Подпись кнопки поиска в зависимости от типа закупок
pub fn submit_caption(procurement_type: ProcurementType) -> &'static str {
    match procurement_type {
        ProcurementType::Active => "Найти активные закупки",
        ProcurementType::Completed => "Найти завершённые закупки",
    }
}

/// Подсказка под переключателем типа закупок
pub fn procurement_hint(procurement_type: ProcurementType) -> &'static str {
    match procurement_type {
        ProcurementType::Active => "Закупки с открытой подачей заявок",
        ProcurementType::Completed => "Завершённые закупки (архив площадок)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::tender::Category;

    #[test]
    fn disabling_category_clears_price_text() {
        let mut input = CategoryInput {
            enabled: true,
            price_text: "250000".to_string(),
        };
        input.set_enabled(false);
        assert!(!input.enabled);
        assert_eq!(input.price_text, "");

        // включение поле не трогает
        input.price_text = "100".to_string();
        input.set_enabled(true);
        assert_eq!(input.price_text, "100");
    }

    #[test]
    fn parse_min_price_accepts_spaces_and_comma() {
        assert_eq!(parse_min_price("100000"), Some(100_000.0));
        assert_eq!(parse_min_price(" 1 500 000 "), Some(1_500_000.0));
        assert_eq!(parse_min_price("100000,50"), Some(100_000.5));
        assert_eq!(parse_min_price(""), None);
        assert_eq!(parse_min_price("abc"), None);
    }

    #[test]
    fn snapshot_respects_price_invariant() {
        let snapshot = FormSnapshot {
            ventilation: CategoryInput {
                enabled: true,
                price_text: "100000".to_string(),
            },
            doors: CategoryInput {
                enabled: false,
                // значение в выключенной категории не должно попасть в запрос
                price_text: "500".to_string(),
            },
            ..Default::default()
        };
        let request = snapshot.to_request();
        let entries = request.to_form_entries();

        assert!(entries.contains(&("min_price_vent".to_string(), "100000".to_string())));
        assert!(!entries.iter().any(|(k, _)| k == "min_price_doors"));
        assert_eq!(request.selected_categories(), [Category::Ventilation]);
    }

    #[test]
    fn snapshot_collects_dictionary_codes() {
        let snapshot = FormSnapshot {
            customer_places: ["OKER31".to_string(), "OKER30".to_string()].into(),
            kladr_ids: ["77".to_string()].into(),
            ..Default::default()
        };
        let request = snapshot.to_request();
        assert_eq!(request.customer_places, ["OKER30", "OKER31"]);
        assert_eq!(request.kladr_ids, ["77"]);
    }

    #[test]
    fn procurement_switch_flips_caption_and_hint() {
        assert_ne!(
            submit_caption(ProcurementType::Active),
            submit_caption(ProcurementType::Completed)
        );
        assert_ne!(
            procurement_hint(ProcurementType::Active),
            procurement_hint(ProcurementType::Completed)
        );
        assert_eq!(
            submit_caption(ProcurementType::default()),
            "Найти активные закупки"
        );
    }
}
