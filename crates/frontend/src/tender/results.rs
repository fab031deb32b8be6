//! Рендеринг результатов поиска: сводные карточки и таблица
//! сравнения источников.

use contracts::tender::{SearchRequest, SearchResponse, SearchStats, Source};
use leptos::prelude::*;

use super::api;

/// Запрос и ответ одной завершённой отправки формы.
/// Карточки рисуются по категориям, выбранным в момент отправки,
/// а не по текущему состоянию переключателей.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub request: SearchRequest,
    pub response: SearchResponse,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub label: String,
    pub count: i64,
    /// Карточка общего итога выделяется цветом
    pub accent: bool,
}

/// Сводные карточки: общий итог плюс по одной карточке на каждую
/// выбранную категорию, для которой сервер прислал счётчик.
pub fn summary_cards(request: &SearchRequest, stats: &SearchStats) -> Vec<SummaryCard> {
    let mut cards = Vec::new();

    let total = if stats.has_source_breakdown() {
        Some(stats.grand_total())
    } else {
        stats.total_found()
    };
    if let Some(count) = total {
        cards.push(SummaryCard {
            label: "Всего найдено закупок".to_string(),
            count,
            accent: true,
        });
    }

    for category in request.selected_categories() {
        if let Some(count) = stats.category_total(category) {
            cards.push(SummaryCard {
                label: category.title().to_string(),
                count,
                accent: false,
            });
        }
    }

    cards
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub label: &'static str,
    /// Счётчики в порядке Source::ALL
    pub per_source: [i64; 2],
    pub total: i64,
}

/// Таблица сравнения источников: строка на каждую выбранную категорию
/// и итоговая строка. None, если схема ответа без разбивки.
pub fn comparison_table(
    request: &SearchRequest,
    stats: &SearchStats,
) -> Option<(Vec<ComparisonRow>, ComparisonRow)> {
    if !stats.has_source_breakdown() {
        return None;
    }

    let rows: Vec<ComparisonRow> = request
        .selected_categories()
        .into_iter()
        .map(|category| {
            let per_source = [
                stats.source_count(category, Source::ZakupkiGovRu).unwrap_or(0),
                stats.source_count(category, Source::SberAst).unwrap_or(0),
            ];
            ComparisonRow {
                label: category.title(),
                per_source,
                total: per_source.iter().sum(),
            }
        })
        .collect();

    let totals = ComparisonRow {
        label: "Итого",
        per_source: [
            stats.source_total(Source::ZakupkiGovRu),
            stats.source_total(Source::SberAst),
        ],
        total: stats.grand_total(),
    };

    Some((rows, totals))
}

/// Число с неразрывными пробелами между тысячными группами
pub fn format_count(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[component]
pub fn SearchResultsView(outcome: SearchOutcome) -> impl IntoView {
    let SearchOutcome { request, response } = outcome;
    let filename = response.filename.clone();

    let on_download = move |_| {
        if let Err(e) = api::download_report(filename.as_deref()) {
            log::warn!("download failed: {}", e);
        }
    };

    let stats_view = response.stats.as_ref().map(|stats| {
        let cards = summary_cards(&request, stats);
        let table = comparison_table(&request, stats);

        view! {
            <div style="display: flex; flex-wrap: wrap; gap: 10px; margin: 15px 0;">
                {cards
                    .into_iter()
                    .map(|card| {
                        let value_color = if card.accent { "#28a745" } else { "#007bff" };
                        view! {
                            <div style="flex: 1 1 200px; padding: 15px; background: #f8f9fa; border: 1px solid #ddd; border-radius: 8px; text-align: center;">
                                <div style=format!("font-size: 28px; font-weight: bold; color: {};", value_color)>
                                    {format_count(card.count)}
                                </div>
                                <div style="font-size: 13px; color: #666;">{card.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            {table.map(|(rows, totals)| view! {
                <table style="width: 100%; border-collapse: collapse; margin: 15px 0;">
                    <thead>
                        <tr style="background: #f1f1f1;">
                            <th style="text-align: left; padding: 8px; border: 1px solid #ddd;">"Категория"</th>
                            <th style="text-align: right; padding: 8px; border: 1px solid #ddd;">{Source::ZakupkiGovRu.title()}</th>
                            <th style="text-align: right; padding: 8px; border: 1px solid #ddd;">{Source::SberAst.title()}</th>
                            <th style="text-align: right; padding: 8px; border: 1px solid #ddd;">"Всего"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td style="padding: 8px; border: 1px solid #ddd;">{row.label}</td>
                                    <td style="text-align: right; padding: 8px; border: 1px solid #ddd;">{format_count(row.per_source[0])}</td>
                                    <td style="text-align: right; padding: 8px; border: 1px solid #ddd;">{format_count(row.per_source[1])}</td>
                                    <td style="text-align: right; padding: 8px; border: 1px solid #ddd; font-weight: bold;">{format_count(row.total)}</td>
                                </tr>
                            })
                            .collect_view()}
                        <tr style="background: #f8f9fa; font-weight: bold;">
                            <td style="padding: 8px; border: 1px solid #ddd;">{totals.label}</td>
                            <td style="text-align: right; padding: 8px; border: 1px solid #ddd;">{format_count(totals.per_source[0])}</td>
                            <td style="text-align: right; padding: 8px; border: 1px solid #ddd;">{format_count(totals.per_source[1])}</td>
                            <td style="text-align: right; padding: 8px; border: 1px solid #ddd;">{format_count(totals.total)}</td>
                        </tr>
                    </tbody>
                </table>
            })}
        }
    });

    let warnings_view = response.warnings.clone().filter(|w| !w.is_empty()).map(|warnings| {
        view! {
            <div style="margin: 10px 0; padding: 10px; background: #fff3cd; border: 1px solid #ffeeba; border-radius: 4px; font-size: 13px;">
                <strong>"Предупреждения:"</strong>
                {warnings
                    .into_iter()
                    .map(|w| view! { <div style="margin-top: 4px;">{w}</div> })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div style="margin-top: 20px; padding: 15px; background: #f9f9f9; border: 1px solid #ddd; border-radius: 8px;">
            <h3 style="color: #28a745;">"Поиск завершён"</h3>

            {response.message.clone().map(|msg| view! {
                <p style="color: #666; font-size: 14px;">{msg}</p>
            })}

            {warnings_view}
            {stats_view}

            <button
                style="padding: 10px 20px; background: #28a745; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 16px;"
                on:click=on_download
            >
                "Скачать отчёт (Excel)"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::tender::{Category, CategorySelection};

    fn request_with(categories: &[Category]) -> SearchRequest {
        let mut request = SearchRequest::default();
        for category in categories {
            *request.selection_mut(*category) = CategorySelection {
                enabled: true,
                min_price: None,
            };
        }
        request
    }

    #[test]
    fn flat_total_renders_exactly_one_card() {
        let stats = SearchStats::from_pairs([("totalFound", 5)]);
        let request = request_with(&[Category::Ventilation, Category::Doors]);
        let cards = summary_cards(&request, &stats);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].count, 5);
        assert!(cards[0].accent);
    }

    #[test]
    fn unselected_categories_get_no_card() {
        let stats = SearchStats::from_pairs([
            ("totalFound", 7),
            ("ventFound", 4),
            ("doorsFound", 3),
        ]);
        // двери не выбраны — карточки по ним нет, даже со счётчиком в ответе
        let cards = summary_cards(&request_with(&[Category::Ventilation]), &stats);
        let labels: Vec<&str> = cards.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Всего найдено закупок", "Вентиляция"]);
    }

    #[test]
    fn comparison_table_absent_for_flat_schema() {
        let stats = SearchStats::from_pairs([("totalFound", 5), ("ventFound", 5)]);
        assert!(comparison_table(&request_with(&[Category::Ventilation]), &stats).is_none());
    }

    #[test]
    fn totals_row_equals_sum_of_source_totals() {
        let stats = SearchStats::from_pairs([
            ("ventFoundZakupkiGovRu", 10),
            ("ventFoundSber", 2),
            ("metalFoundZakupkiGovRu", 1),
            ("totalFoundZakupkiGovRu", 11),
            ("totalFoundSber", 2),
        ]);
        let request = request_with(&[Category::Ventilation, Category::Metal]);
        let (rows, totals) = comparison_table(&request, &stats).unwrap();

        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.total, row.per_source[0] + row.per_source[1]);
        }
        assert_eq!(totals.total, totals.per_source[0] + totals.per_source[1]);
        assert_eq!(totals.total, 13);
        // пропущенный у источника ключ рисуется нулём
        assert_eq!(rows[1].per_source, [1, 0]);
    }

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(5), "5");
        assert_eq!(format_count(1_234_567), "1\u{00a0}234\u{00a0}567");
        assert_eq!(format_count(-1000), "-1\u{00a0}000");
    }

    #[test]
    fn format_count_handles_i64_min() {
        assert_eq!(
            format_count(i64::MIN),
            "-9\u{00a0}223\u{00a0}372\u{00a0}036\u{00a0}854\u{00a0}775\u{00a0}808"
        );
    }
}
