use serde::{Deserialize, Serialize};

/// Категория закупок. Четыре независимых направления поиска,
/// каждое со своим переключателем и порогом минимальной цены.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Ventilation,
    Doors,
    Construction,
    Metal,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Ventilation,
        Category::Doors,
        Category::Construction,
        Category::Metal,
    ];

    /// Имя булевого поля переключателя в multipart-теле запроса
    pub fn switch_field(&self) -> &'static str {
        match self {
            Category::Ventilation => "search_vent",
            Category::Doors => "search_doors",
            Category::Construction => "search_build",
            Category::Metal => "search_metal",
        }
    }

    /// Имя поля минимальной цены в multipart-теле запроса
    pub fn price_field(&self) -> &'static str {
        match self {
            Category::Ventilation => "min_price_vent",
            Category::Doors => "min_price_doors",
            Category::Construction => "min_price_build",
            Category::Metal => "min_price_metal",
        }
    }

    /// Префикс ключей этой категории в карте статистики ответа
    /// ("vent" -> "ventFound", "ventFoundSber", ...)
    pub fn stats_key(&self) -> &'static str {
        match self {
            Category::Ventilation => "vent",
            Category::Doors => "doors",
            Category::Construction => "build",
            Category::Metal => "metal",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Ventilation => "Вентиляция",
            Category::Doors => "Монтаж дверей",
            Category::Construction => "Строительство/реконструкция",
            Category::Metal => "Металлоконструкции",
        }
    }
}

/// Тип закупок: активные (идёт подача заявок) или завершённые
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcurementType {
    #[default]
    Active,
    Completed,
}

impl ProcurementType {
    pub fn wire_value(&self) -> &'static str {
        match self {
            ProcurementType::Active => "active",
            ProcurementType::Completed => "completed",
        }
    }
}

/// Состояние одной категории на момент отправки формы
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CategorySelection {
    pub enabled: bool,
    /// Порог минимальной цены; участвует в запросе только при enabled
    #[serde(rename = "minPrice")]
    pub min_price: Option<f64>,
}

impl CategorySelection {
    /// Порог, который реально уходит на сервер: категория включена
    /// и значение строго положительное
    pub fn effective_min_price(&self) -> Option<f64> {
        if !self.enabled {
            return None;
        }
        self.min_price.filter(|p| *p > 0.0)
    }
}

/// Полезная нагрузка POST /tender/searchTenders.
/// Собирается из состояния формы в момент отправки, ничего не кэширует.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    pub ventilation: CategorySelection,
    pub doors: CategorySelection,
    pub construction: CategorySelection,
    pub metal: CategorySelection,
    #[serde(rename = "procurementType")]
    pub procurement_type: ProcurementType,
    /// Коды федеральных округов (customerPlace), повторяющееся поле
    #[serde(rename = "customerPlaces")]
    pub customer_places: Vec<String>,
    /// КЛАДР-коды регионов (delKladrIds), повторяющееся поле
    #[serde(rename = "kladrIds")]
    pub kladr_ids: Vec<String>,
}

impl SearchRequest {
    pub fn selection(&self, category: Category) -> &CategorySelection {
        match category {
            Category::Ventilation => &self.ventilation,
            Category::Doors => &self.doors,
            Category::Construction => &self.construction,
            Category::Metal => &self.metal,
        }
    }

    pub fn selection_mut(&mut self, category: Category) -> &mut CategorySelection {
        match category {
            Category::Ventilation => &mut self.ventilation,
            Category::Doors => &mut self.doors,
            Category::Construction => &mut self.construction,
            Category::Metal => &mut self.metal,
        }
    }

    pub fn selected_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.selection(*c).enabled)
            .collect()
    }

    /// Развёртка в список multipart-полей.
    /// Инвариант: min_price_* присутствует только если переключатель
    /// категории включён и значение > 0.
    pub fn to_form_entries(&self) -> Vec<(String, String)> {
        let mut entries = Vec::new();

        for category in Category::ALL {
            let selection = self.selection(category);
            entries.push((
                category.switch_field().to_string(),
                selection.enabled.to_string(),
            ));
            if let Some(price) = selection.effective_min_price() {
                entries.push((category.price_field().to_string(), format_price(price)));
            }
        }

        entries.push((
            "procurement_type".to_string(),
            self.procurement_type.wire_value().to_string(),
        ));

        for place in &self.customer_places {
            entries.push(("vent_customer_place".to_string(), place.clone()));
        }
        for kladr in &self.kladr_ids {
            entries.push(("vent_del_kladr_ids".to_string(), kladr.clone()));
        }

        entries
    }
}

/// Целые пороги уходят без дробной части ("100000"), дробные — как есть
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        price.to_string()
    }
}
