use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::request::Category;

/// Источник данных — одна из двух торговых площадок,
/// чьи счётчики агрегируются по категориям.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    ZakupkiGovRu,
    SberAst,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::ZakupkiGovRu, Source::SberAst];

    /// Суффикс ключей этого источника в карте статистики
    /// ("ventFoundZakupkiGovRu", "totalFoundSber", ...)
    pub fn key_suffix(&self) -> &'static str {
        match self {
            Source::ZakupkiGovRu => "ZakupkiGovRu",
            Source::SberAst => "Sber",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Source::ZakupkiGovRu => "zakupki.gov.ru",
            Source::SberAst => "Сбербанк-АСТ",
        }
    }
}

/// Статистика поиска: плоская карта счётчиков, как её отдаёт backend.
///
/// Схема ответа менялась со временем: ранние версии присылали только
/// "totalFound" и "ventFound", поздние — разбивку по источникам
/// ("ventFoundZakupkiGovRu", "totalFoundSber"). Аксессоры ниже позволяют
/// одной функции рендеринга работать с той схемой, которая реально пришла.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchStats {
    #[serde(flatten)]
    counts: BTreeMap<String, i64>,
}

impl SearchStats {
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        SearchStats {
            counts: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Переданный сервером общий счётчик (старая схема)
    pub fn total_found(&self) -> Option<i64> {
        self.counts.get("totalFound").copied()
    }

    /// Счётчик категории без разбивки по источникам (старая схема)
    pub fn category_count(&self, category: Category) -> Option<i64> {
        self.counts
            .get(&format!("{}Found", category.stats_key()))
            .copied()
    }

    /// Счётчик категории по конкретному источнику
    pub fn source_count(&self, category: Category, source: Source) -> Option<i64> {
        self.counts
            .get(&format!(
                "{}Found{}",
                category.stats_key(),
                source.key_suffix()
            ))
            .copied()
    }

    /// Итог по источнику; отсутствующий ключ считается нулём
    pub fn source_total(&self, source: Source) -> i64 {
        self.counts
            .get(&format!("totalFound{}", source.key_suffix()))
            .copied()
            .unwrap_or(0)
    }

    /// Общий итог: всегда вычисляется как сумма итогов источников,
    /// с провода не читается
    pub fn grand_total(&self) -> i64 {
        Source::ALL.iter().map(|s| self.source_total(*s)).sum()
    }

    /// Есть ли в пришедшей схеме разбивка по источникам
    pub fn has_source_breakdown(&self) -> bool {
        Source::ALL.iter().any(|source| {
            self.counts
                .contains_key(&format!("totalFound{}", source.key_suffix()))
                || Category::ALL
                    .iter()
                    .any(|c| self.source_count(*c, *source).is_some())
        })
    }

    /// Счётчик категории для сводной карточки: сумма по источникам,
    /// если разбивка есть, иначе плоский счётчик старой схемы
    pub fn category_total(&self, category: Category) -> Option<i64> {
        if self.has_source_breakdown() {
            let per_source: Vec<i64> = Source::ALL
                .iter()
                .filter_map(|s| self.source_count(category, *s))
                .collect();
            if per_source.is_empty() {
                None
            } else {
                Some(per_source.into_iter().sum())
            }
        } else {
            self.category_count(category)
        }
    }
}

/// Ответ POST /tender/searchTenders: либо error, либо stats
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub stats: Option<SearchStats>,
    #[serde(default)]
    pub filename: Option<String>,
    /// Частичные сбои парсинга; результат при этом не отбрасывается
    #[serde(default)]
    pub warnings: Option<Vec<String>>,
}

impl SearchResponse {
    /// Текст для области ошибки: Some — ответ с логической ошибкой
    /// (details дописывается через двоеточие), None — успешный ответ.
    /// Ровно одна из двух областей (ошибка/результаты) рисуется по
    /// этому значению.
    pub fn error_message(&self) -> Option<String> {
        let error = self.error.as_ref()?;
        Some(match &self.details {
            Some(details) => format!("{}: {}", error, details),
            None => error.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grand_total_is_sum_of_source_totals() {
        let stats = SearchStats::from_pairs([
            ("ventFoundZakupkiGovRu", 12),
            ("ventFoundSber", 3),
            ("doorsFoundZakupkiGovRu", 7),
            ("totalFoundZakupkiGovRu", 19),
            ("totalFoundSber", 3),
            // сервер прислал и totalFound — он игнорируется
            ("totalFound", 999),
        ]);
        assert_eq!(stats.grand_total(), 22);
        assert_eq!(
            stats.grand_total(),
            stats.source_total(Source::ZakupkiGovRu) + stats.source_total(Source::SberAst)
        );
    }

    #[test]
    fn flat_schema_has_no_breakdown() {
        let stats = SearchStats::from_pairs([("totalFound", 5)]);
        assert!(!stats.has_source_breakdown());
        assert_eq!(stats.total_found(), Some(5));
        assert_eq!(stats.category_total(Category::Ventilation), None);
    }

    #[test]
    fn category_total_sums_sources_when_breakdown_present() {
        let stats = SearchStats::from_pairs([
            ("ventFoundZakupkiGovRu", 10),
            ("ventFoundSber", 4),
            ("totalFoundZakupkiGovRu", 10),
            ("totalFoundSber", 4),
        ]);
        assert!(stats.has_source_breakdown());
        assert_eq!(stats.category_total(Category::Ventilation), Some(14));
        // категория без единого ключа не рисуется вовсе
        assert_eq!(stats.category_total(Category::Doors), None);
    }

    #[test]
    fn missing_source_total_counts_as_zero() {
        let stats = SearchStats::from_pairs([("totalFoundZakupkiGovRu", 8)]);
        assert_eq!(stats.source_total(Source::SberAst), 0);
        assert_eq!(stats.grand_total(), 8);
    }

    #[test]
    fn error_response_deserializes() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"error":"Invalid input data","details":"bad form"}"#)
                .unwrap();
        assert_eq!(response.error.as_deref(), Some("Invalid input data"));
        assert!(response.stats.is_none());
    }

    #[test]
    fn error_field_selects_error_branch() {
        let response: SearchResponse = serde_json::from_str(r#"{"error":"x"}"#).unwrap();
        assert_eq!(response.error_message(), Some("x".to_string()));

        let response: SearchResponse =
            serde_json::from_str(r#"{"error":"x","details":"y"}"#).unwrap();
        assert_eq!(response.error_message(), Some("x: y".to_string()));

        // успешный ответ не попадает в ветку ошибки, даже со stats
        let response: SearchResponse =
            serde_json::from_str(r#"{"stats":{"totalFound":5}}"#).unwrap();
        assert_eq!(response.error_message(), None);
    }

    #[test]
    fn success_response_deserializes_stats_map() {
        let response: SearchResponse = serde_json::from_str(
            r#"{
                "message": "Excel file created successfully",
                "filename": "Закупки.xlsx",
                "stats": {"ventFoundSber": 2, "totalFoundSber": 2, "totalFoundZakupkiGovRu": 0}
            }"#,
        )
        .unwrap();
        assert!(response.error.is_none());
        let stats = response.stats.unwrap();
        assert_eq!(stats.source_count(Category::Ventilation, Source::SberAst), Some(2));
        assert_eq!(stats.grand_total(), 2);
        assert_eq!(response.filename.as_deref(), Some("Закупки.xlsx"));
    }
}
