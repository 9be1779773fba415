use material_property_toolbox::material::{
    normalize, normalize_with, ColumnLayout, NormalizeOptions, PropertyRecord, PropertyTable,
    RawTableGroup, RawTableRow,
};

fn row(cells: &[&str]) -> RawTableRow {
    cells
        .iter()
        .map(|c| if *c == "<null>" { None } else { Some(c.to_string()) })
        .collect()
}

fn preamble() -> RawTableGroup {
    vec![row(&["Copper, Cu; Annealed"]), row(&["Categories: Metal"])]
}

fn header() -> RawTableRow {
    row(&["", "", "", ""])
}

/// 정규화된 표를 다시 원시 표 형태로 감싼다 (안내 표 + 머리글 + 섹션 행 + 자료).
fn rewrap(table: &PropertyTable) -> Vec<RawTableGroup> {
    let mut group = vec![header(), row(&["Physical Properties", "", "Metric", "English"])];
    group.extend(table.iter().map(|r| {
        vec![
            Some(r.property.clone()),
            None,
            Some(r.metric.clone()),
            Some(r.imperial.clone()),
        ]
    }));
    vec![preamble(), group]
}

fn copper_document() -> Vec<RawTableGroup> {
    vec![
        preamble(),
        vec![
            header(),
            row(&["Copper, Cu; Annealed", "", "", ""]),
            row(&["Physical Properties", "", "Metric", "English"]),
            row(&["Density", "", "8.96 g/cc", "0.324 lb/in³"]),
            row(&["", "", "", ""]),
            row(&["Mechanical Properties", "", "Metric", "English"]),
            row(&["Tensile Strength, Ultimate", "", "210 MPa", "30500 psi"]),
            row(&["Tensile Strength, Yield", "", "33.3 MPa", "4830 psi"]),
            row(&["", "", "69 MPa", "10000 psi"]),
        ],
        vec![
            header(),
            row(&["Mechanical Properties", "<null>", "Metric", "English"]),
            row(&["Elongation at Break", "None", "50 %", "50 %"]),
            row(&["<null>", "None", "60 %", "60 %"]),
            row(&["<null>", "<null>", "45 % @Thickness 2 mm", "<null>"]),
        ],
    ]
}

#[test]
fn normalizes_multi_page_document() {
    let table = normalize(&copper_document());
    let expected = vec![
        PropertyRecord::new("Density", "8.96 g/cc", "0.324 lb/in³"),
        PropertyRecord::new("Tensile Strength, Ultimate", "210 MPa", "30500 psi"),
        PropertyRecord::new("Tensile Strength, Yield", "33.3 MPa", "4830 psi"),
        PropertyRecord::new("Tensile Strength, Yield (Alternative)", "69 MPa", "10000 psi"),
        PropertyRecord::new("Elongation at Break", "50 %", "50 %"),
        PropertyRecord::new("Elongation at Break (Alternative)", "60 %", "60 %"),
        PropertyRecord::new("Elongation at Break (Alternative)", "45 % @Thickness 2 mm", ""),
    ];
    assert_eq!(table.records(), expected.as_slice());
}

#[test]
fn continuation_row_is_merged_not_orphaned() {
    let groups = vec![
        preamble(),
        vec![
            header(),
            row(&["Physical Properties", "", "Metric", "English"]),
            row(&["Density", "", "8.96 g/cc", "0.324 lb/in³"]),
            row(&["", "", "8.94 g/cc @20 °C", "0.323 lb/in³"]),
        ],
    ];
    let table = normalize(&groups);
    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[1].property, "Density (Alternative)");
    assert_eq!(table.records()[1].metric, "8.94 g/cc @20 °C");
    assert!(table.iter().all(|r| !r.property.is_empty()));
}

#[test]
fn first_group_is_always_discarded() {
    // 안내 표에 섹션 표시가 있어도 자료로 쓰지 않는다.
    let groups = vec![vec![
        header(),
        row(&["Physical Properties", "", "Metric", "English"]),
        row(&["Density", "", "8.96 g/cc", "0.324 lb/in³"]),
    ]];
    assert!(normalize(&groups).is_empty());
}

#[test]
fn header_row_of_each_group_is_not_data() {
    let groups = vec![
        preamble(),
        vec![row(&["Physical Properties", "", "Metric", "English"])],
        vec![
            row(&["Thermal Properties", "", "Metric", "English"]),
            row(&["Melting Point", "", "1083 °C", "1981 °F"]),
        ],
    ];
    // 두 섹션 행 모두 머리글로 소비되어 자료 구간 표시가 남지 않는다.
    assert!(normalize(&groups).is_empty());
}

#[test]
fn empty_inputs_yield_empty_table() {
    assert!(normalize(&[]).is_empty());
    assert!(normalize(&[preamble()]).is_empty());
    assert!(normalize(&[preamble(), vec![]]).is_empty());
    assert!(normalize(&[preamble(), vec![header()]]).is_empty());
}

#[test]
fn missing_section_marker_yields_empty_table() {
    let groups = vec![
        preamble(),
        vec![
            header(),
            row(&["Density", "", "8.96 g/cc", "0.324 lb/in³"]),
            row(&["Hardness, Vickers", "", "50", "50"]),
        ],
    ];
    assert!(normalize(&groups).is_empty());
}

#[test]
fn blank_and_none_rows_are_dropped() {
    let groups = vec![
        preamble(),
        vec![
            header(),
            row(&["Physical Properties", "", "Metric", "English"]),
            row(&["None", "  ", "", "None"]),
            row(&["<null>", "<null>", "<null>"]),
            row(&["Density", "", "8.96 g/cc", "0.324 lb/in³"]),
        ],
    ];
    let table = normalize(&groups);
    assert_eq!(table.len(), 1);
    assert_eq!(table.records()[0].property, "Density");
}

#[test]
fn short_rows_fill_missing_values_with_empty_strings() {
    let groups = vec![
        preamble(),
        vec![
            header(),
            row(&["Physical Properties"]),
            row(&["Density", "", "8.96 g/cc"]),
            row(&["Color"]),
        ],
    ];
    let table = normalize(&groups);
    assert_eq!(
        table.records(),
        [
            PropertyRecord::new("Density", "8.96 g/cc", ""),
            PropertyRecord::new("Color", "", ""),
        ]
        .as_slice()
    );
}

#[test]
fn rows_before_first_section_are_dropped() {
    let table = normalize(&copper_document());
    assert!(table.get("Copper, Cu; Annealed").is_none());
    assert!(table.iter().all(|r| !r.mentions("properties")));
}

#[test]
fn orphan_continuation_after_section_marker_is_dropped() {
    let groups = vec![
        preamble(),
        vec![
            header(),
            row(&["", "", "Properties", "English"]),
            row(&["", "", "1.0", "2.0"]),
            row(&["Density", "", "8.96 g/cc", "0.324 lb/in³"]),
        ],
    ];
    let table = normalize(&groups);
    assert_eq!(table.len(), 1);
    assert_eq!(table.records()[0].property, "Density");
}

#[test]
fn renormalizing_is_idempotent() {
    let once = normalize(&copper_document());
    let twice = normalize(&rewrap(&once));
    assert_eq!(once, twice);
}

#[test]
fn column_layout_is_configurable() {
    let opts = NormalizeOptions {
        skip_leading_groups: 0,
        section_marker: "material data".to_string(),
        alternative_suffix: " [alt]".to_string(),
        layout: ColumnLayout {
            property: 1,
            metric: 0,
            imperial: 2,
        },
    };
    let groups = vec![vec![
        header(),
        row(&["SI", "Material Data", "US"]),
        row(&["2.70 g/cc", "Density", "0.0975 lb/in³"]),
        row(&["2.71 g/cc", "", ""]),
    ]];
    let table = normalize_with(&groups, &opts);
    assert_eq!(
        table.records(),
        [
            PropertyRecord::new("Density", "2.70 g/cc", "0.0975 lb/in³"),
            PropertyRecord::new("Density [alt]", "2.71 g/cc", ""),
        ]
        .as_slice()
    );
}

#[test]
fn exact_lookup_returns_first_occurrence() {
    let table = normalize(&copper_document());
    let rec = table
        .get("Elongation at Break (Alternative)")
        .expect("alternative row");
    assert_eq!(rec.metric, "60 %");
}
