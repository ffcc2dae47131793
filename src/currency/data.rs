// ============================================================================
// Built-in Currency Data
// Curated CLDR/ISO 4217 subsets backing the registry's read path
// ============================================================================
//
// Three tables:
// - CURRENCIES: code -> {numeric code, fraction digits}, in a fixed curated
//   order (common reserve currencies first, then alphabetical) which also
//   defines the enumeration order of `currency_codes()`.
// - SYMBOLS: code -> ordered symbol entries. The first entry is the
//   "en"/"en-US" default; later entries are locale-scoped overrides checked
//   in registration order against the locale parent chain.
// - COUNTRY_CURRENCIES: ISO 3166 country -> currency, sorted by country.

/// One built-in currency record.
pub(crate) struct BuiltinCurrency {
    pub code: &'static str,
    pub numeric_code: &'static str,
    pub digits: u8,
}

/// One built-in symbol entry: a symbol and the locales it applies to.
pub(crate) struct BuiltinSymbol {
    pub symbol: &'static str,
    pub locales: &'static [&'static str],
}

const fn currency(code: &'static str, numeric_code: &'static str, digits: u8) -> BuiltinCurrency {
    BuiltinCurrency {
        code,
        numeric_code,
        digits,
    }
}

pub(crate) static CURRENCIES: &[BuiltinCurrency] = &[
    // Reserve currencies first; the rest alphabetical.
    currency("USD", "840", 2),
    currency("EUR", "978", 2),
    currency("JPY", "392", 0),
    currency("GBP", "826", 2),
    currency("CHF", "756", 2),
    currency("AED", "784", 2),
    currency("ARS", "032", 2),
    currency("AUD", "036", 2),
    currency("BGN", "975", 2),
    currency("BHD", "048", 3),
    currency("BRL", "986", 2),
    currency("CAD", "124", 2),
    currency("CLP", "152", 0),
    currency("CNY", "156", 2),
    currency("COP", "170", 2),
    currency("CZK", "203", 2),
    currency("DKK", "208", 2),
    currency("EGP", "818", 2),
    currency("HKD", "344", 2),
    currency("HUF", "348", 2),
    currency("IDR", "360", 2),
    currency("ILS", "376", 2),
    currency("INR", "356", 2),
    currency("ISK", "352", 0),
    currency("KRW", "410", 0),
    currency("KWD", "414", 3),
    currency("MAD", "504", 2),
    currency("MXN", "484", 2),
    currency("MYR", "458", 2),
    currency("NOK", "578", 2),
    currency("NPR", "524", 2),
    currency("NZD", "554", 2),
    currency("OMR", "512", 3),
    currency("PEN", "604", 2),
    currency("PHP", "608", 2),
    currency("PLN", "985", 2),
    currency("RON", "946", 2),
    currency("RSD", "941", 0),
    currency("RUB", "643", 2),
    currency("SAR", "682", 2),
    currency("SEK", "752", 2),
    currency("SGD", "702", 2),
    currency("THB", "764", 2),
    currency("TND", "788", 3),
    currency("TRY", "949", 2),
    currency("TWD", "901", 2),
    currency("UAH", "980", 2),
    currency("UYU", "858", 2),
    currency("VND", "704", 0),
    currency("ZAR", "710", 2),
];

pub(crate) static SYMBOLS: &[(&str, &[BuiltinSymbol])] = &[
    (
        "AUD",
        &[
            BuiltinSymbol {
                symbol: "A$",
                locales: &["en"],
            },
            BuiltinSymbol {
                symbol: "$AU",
                locales: &["fr"],
            },
        ],
    ),
    (
        "BRL",
        &[BuiltinSymbol {
            symbol: "R$",
            locales: &["en"],
        }],
    ),
    (
        "CAD",
        &[
            BuiltinSymbol {
                symbol: "CA$",
                locales: &["en"],
            },
            BuiltinSymbol {
                symbol: "$CA",
                locales: &["fr"],
            },
        ],
    ),
    (
        "CNY",
        &[
            BuiltinSymbol {
                symbol: "CN¥",
                locales: &["en"],
            },
            BuiltinSymbol {
                symbol: "¥",
                locales: &["zh"],
            },
        ],
    ),
    (
        "EUR",
        &[BuiltinSymbol {
            symbol: "€",
            locales: &["en"],
        }],
    ),
    (
        "GBP",
        &[
            BuiltinSymbol {
                symbol: "£",
                locales: &["en"],
            },
            BuiltinSymbol {
                symbol: "£GB",
                locales: &["fr"],
            },
        ],
    ),
    (
        "HKD",
        &[BuiltinSymbol {
            symbol: "HK$",
            locales: &["en"],
        }],
    ),
    (
        "ILS",
        &[BuiltinSymbol {
            symbol: "₪",
            locales: &["en"],
        }],
    ),
    (
        "INR",
        &[BuiltinSymbol {
            symbol: "₹",
            locales: &["en"],
        }],
    ),
    (
        "JPY",
        &[
            BuiltinSymbol {
                symbol: "¥",
                locales: &["en"],
            },
            BuiltinSymbol {
                symbol: "JP¥",
                locales: &["es", "fr"],
            },
        ],
    ),
    (
        "KRW",
        &[BuiltinSymbol {
            symbol: "₩",
            locales: &["en"],
        }],
    ),
    (
        "MXN",
        &[BuiltinSymbol {
            symbol: "MX$",
            locales: &["en"],
        }],
    ),
    (
        "NZD",
        &[BuiltinSymbol {
            symbol: "NZ$",
            locales: &["en"],
        }],
    ),
    (
        "PHP",
        &[BuiltinSymbol {
            symbol: "₱",
            locales: &["en"],
        }],
    ),
    (
        "RUB",
        &[BuiltinSymbol {
            symbol: "₽",
            locales: &["en"],
        }],
    ),
    (
        "THB",
        &[BuiltinSymbol {
            symbol: "฿",
            locales: &["en"],
        }],
    ),
    (
        "TRY",
        &[BuiltinSymbol {
            symbol: "₺",
            locales: &["en"],
        }],
    ),
    (
        "TWD",
        &[BuiltinSymbol {
            symbol: "NT$",
            locales: &["en"],
        }],
    ),
    (
        "UAH",
        &[BuiltinSymbol {
            symbol: "₴",
            locales: &["en"],
        }],
    ),
    (
        "USD",
        &[
            BuiltinSymbol {
                symbol: "$",
                locales: &["en"],
            },
            BuiltinSymbol {
                symbol: "US$",
                locales: &[
                    "ar", "bg", "bn", "es", "fa", "hi", "my", "ne", "sr", "sr-Latn",
                ],
            },
            BuiltinSymbol {
                symbol: "$US",
                locales: &["fr"],
            },
        ],
    ),
    (
        "VND",
        &[BuiltinSymbol {
            symbol: "₫",
            locales: &["en"],
        }],
    ),
];

/// ISO 3166 country code -> currency code, sorted by country code.
pub(crate) static COUNTRY_CURRENCIES: &[(&str, &str)] = &[
    ("AE", "AED"),
    ("AR", "ARS"),
    ("AT", "EUR"),
    ("AU", "AUD"),
    ("BE", "EUR"),
    ("BG", "BGN"),
    ("BH", "BHD"),
    ("BR", "BRL"),
    ("CA", "CAD"),
    ("CH", "CHF"),
    ("CL", "CLP"),
    ("CN", "CNY"),
    ("CO", "COP"),
    ("CZ", "CZK"),
    ("DE", "EUR"),
    ("DK", "DKK"),
    ("EG", "EGP"),
    ("ES", "EUR"),
    ("FI", "EUR"),
    ("FR", "EUR"),
    ("GB", "GBP"),
    ("HK", "HKD"),
    ("HU", "HUF"),
    ("ID", "IDR"),
    ("IE", "EUR"),
    ("IL", "ILS"),
    ("IN", "INR"),
    ("IS", "ISK"),
    ("IT", "EUR"),
    ("JP", "JPY"),
    ("KR", "KRW"),
    ("KW", "KWD"),
    ("MA", "MAD"),
    ("MX", "MXN"),
    ("MY", "MYR"),
    ("NL", "EUR"),
    ("NO", "NOK"),
    ("NP", "NPR"),
    ("NZ", "NZD"),
    ("OM", "OMR"),
    ("PE", "PEN"),
    ("PH", "PHP"),
    ("PL", "PLN"),
    ("PT", "EUR"),
    ("RO", "RON"),
    ("RS", "RSD"),
    ("RU", "RUB"),
    ("SA", "SAR"),
    ("SE", "SEK"),
    ("SG", "SGD"),
    ("TH", "THB"),
    ("TN", "TND"),
    ("TR", "TRY"),
    ("TW", "TWD"),
    ("UA", "UAH"),
    ("US", "USD"),
    ("UY", "UYU"),
    ("VN", "VND"),
    ("ZA", "ZAR"),
];
