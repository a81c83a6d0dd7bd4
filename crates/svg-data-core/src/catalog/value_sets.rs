use super::ValueSetDef;

pub const VALUE_SETS: &[ValueSetDef] = &[
    // Key spelling is what existing consumers of svg.json look up.
    ValueSetDef {
        name: "referrerpoliciy",
        values: &[
            "no-referrer",
            "no-referrer-when-downgrade",
            "origin",
            "origin-when-cross-origin",
            "same-origin",
            "strict-origin",
            "strict-origin-when-cross-origin",
            "unsafe-url",
        ],
    },
    ValueSetDef {
        name: "xo",
        values: &["anonymous", "use-credentials"],
    },
];
