use crate::chart::ChartTarget;
use crate::dashboard::Dashboard;
use crate::models::ChartData;
use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CsvRow {
    label: String,
    employee: f64,
    ssh: f64,
    signs: f64,
}

/// Load chart input from JSON, or from CSV with header `label,employee,ssh,signs`.
/// The format follows the file extension; anything but `.csv` is read as JSON.
pub fn load_chart_data<P: AsRef<Path>>(path: P) -> Result<ChartData> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        load_csv(path)
    } else {
        let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        serde_json::from_reader(f).with_context(|| format!("parsing {}", path.display()))
    }
}

fn load_csv(path: &Path) -> Result<ChartData> {
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut data = ChartData {
        labels: Vec::new(),
        employee: Vec::new(),
        ssh: Vec::new(),
        signs: Vec::new(),
    };
    for row in rdr.deserialize::<CsvRow>() {
        let row = row.with_context(|| format!("reading {}", path.display()))?;
        data.labels.push(row.label);
        data.employee.push(row.employee);
        data.ssh.push(row.ssh);
        data.signs.push(row.signs);
    }
    if data.labels.is_empty() {
        bail!("{} has no rows", path.display());
    }
    Ok(data)
}

/// Read unix timestamps from a CSV with a `unix_seconds` column.
pub fn load_timestamps<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    #[derive(Deserialize)]
    struct Row {
        unix_seconds: i64,
    }
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let timestamps = rdr
        .deserialize::<Row>()
        .map(|r| {
            r.map(|r| r.unix_seconds)
                .with_context(|| format!("reading {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(timestamps)
}

/// Save the current geometry of every mounted chart as pretty JSON,
/// keyed by analytic key.
pub fn save_snapshot_json<P: AsRef<Path>>(dashboard: &Dashboard, path: P) -> Result<()> {
    let path = path.as_ref();
    let charts: BTreeMap<&str, &ChartTarget> = dashboard.charts().collect();
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let s = serde_json::to_string_pretty(&charts)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
