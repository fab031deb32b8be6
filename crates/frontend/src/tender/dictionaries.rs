//! Статические словари формы поиска

/// Федеральные округа заказчика: (код ОКЭР для customerPlace, подпись)
pub const FEDERAL_DISTRICTS: &[(&str, &str)] = &[
    ("OKER30", "Центральный ФО"),
    ("OKER31", "Северо-Западный ФО"),
    ("OKER33", "Приволжский ФО"),
    ("OKER34", "Южный ФО"),
    ("OKER35", "Сибирский ФО"),
    ("OKER36", "Дальневосточный ФО"),
    ("OKER37", "Уральский ФО"),
    ("OKER38", "Северо-Кавказский ФО"),
];

/// Регионы поставки: (КЛАДР-код для delKladrIds, подпись)
pub const KLADR_REGIONS: &[(&str, &str)] = &[
    ("77", "Москва"),
    ("50", "Московская область"),
    ("78", "Санкт-Петербург"),
    ("47", "Ленинградская область"),
    ("16", "Республика Татарстан"),
    ("23", "Краснодарский край"),
    ("52", "Нижегородская область"),
    ("61", "Ростовская область"),
    ("63", "Самарская область"),
    ("66", "Свердловская область"),
    ("74", "Челябинская область"),
    ("54", "Новосибирская область"),
];
