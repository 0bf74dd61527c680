//! Reference bridge data shared by unit tests.

use crate::models::{BridgeRecord, GeoPoint};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Three rows as they appear in the raw export.
pub fn three_bridges_raw() -> Vec<Vec<String>> {
    vec![
        row(&[
            "1 -  32/",
            "Highway 24 Underpass at Highway 403",
            "403",
            "43.167233",
            "-80.275567",
            "1965",
            "2014",
            "2009",
            "4",
            "Total=64  (1)=12;(2)=19;(3)=21;(4)=12;",
            "65",
            "04/13/2012",
            "72.3",
            "",
            "72.3",
            "",
            "69.5",
            "",
            "70",
            "",
            "70.3",
            "",
            "70.5",
            "",
            "70.7",
            "72.9",
            "",
        ]),
        row(&[
            "1 -  43/",
            "WEST STREET UNDERPASS",
            "403",
            "43.164531",
            "-80.251582",
            "1963",
            "2014",
            "2007",
            "4",
            "Total=60.4  (1)=12.2;(2)=18;(3)=18;(4)=12.2;",
            "61",
            "04/13/2012",
            "71.5",
            "",
            "71.5",
            "",
            "68.1",
            "",
            "69",
            "",
            "69.4",
            "",
            "69.4",
            "",
            "70.3",
            "73.3",
            "",
        ]),
        row(&[
            "2 -   4/",
            "STOKES RIVER BRIDGE",
            "6",
            "45.036739",
            "-81.33579",
            "1958",
            "2013",
            "",
            "1",
            "Total=16  (1)=16;",
            "18.4",
            "08/28/2013",
            "85.1",
            "85.1",
            "",
            "67.8",
            "",
            "67.4",
            "",
            "69.2",
            "70",
            "70.5",
            "",
            "75.1",
            "",
            "90.1",
            "",
        ]),
    ]
}

#[allow(clippy::too_many_arguments)]
fn bridge(
    id: u32,
    name: &str,
    highway: &str,
    lat: f64,
    lon: f64,
    years: [&str; 3],
    span_lengths: Vec<f64>,
    total_length: f64,
    last_inspection_date: &str,
    bci_history: Vec<f64>,
) -> BridgeRecord {
    BridgeRecord {
        id,
        name: name.to_string(),
        highway: highway.to_string(),
        location: GeoPoint::new(lat, lon),
        year_built: years[0].to_string(),
        last_major_rehab_year: years[1].to_string(),
        last_minor_rehab_year: years[2].to_string(),
        span_count: span_lengths.len() as u32,
        span_lengths,
        total_length,
        last_inspection_date: last_inspection_date.to_string(),
        bci_history,
    }
}

/// The same three bridges after normalization.
pub fn three_bridges() -> Vec<BridgeRecord> {
    vec![
        bridge(
            1,
            "Highway 24 Underpass at Highway 403",
            "403",
            43.167233,
            -80.275567,
            ["1965", "2014", "2009"],
            vec![12.0, 19.0, 21.0, 12.0],
            65.0,
            "04/13/2012",
            vec![72.3, 69.5, 70.0, 70.3, 70.5, 70.7, 72.9],
        ),
        bridge(
            2,
            "WEST STREET UNDERPASS",
            "403",
            43.164531,
            -80.251582,
            ["1963", "2014", "2007"],
            vec![12.2, 18.0, 18.0, 12.2],
            61.0,
            "04/13/2012",
            vec![71.5, 68.1, 69.0, 69.4, 69.4, 70.3, 73.3],
        ),
        bridge(
            3,
            "STOKES RIVER BRIDGE",
            "6",
            45.036739,
            -81.33579,
            ["1958", "2013", ""],
            vec![16.0],
            18.4,
            "08/28/2013",
            vec![85.1, 67.8, 67.4, 69.2, 70.0, 70.5, 75.1, 90.1],
        ),
    ]
}
