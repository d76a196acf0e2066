use crate::telemetry::logging;
use crate::warp::codec;
use crate::warp::registry::WarpList;
use std::fs;
use std::path::{Path, PathBuf};

const WARP_FILE: &str = "warps.json";
const BACKUP_FILE: &str = "warps.json.bak";

/// File-backed storage for the warp list: a JSON array of encoded warp
/// records in the plugin data directory.
#[derive(Debug, Clone)]
pub struct WarpStore {
    root: PathBuf,
}

/// What happened during a load: malformed records are skipped, not fatal.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

impl WarpStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn warp_path(&self) -> PathBuf {
        self.root.join(WARP_FILE)
    }

    fn backup_path(&self) -> PathBuf {
        self.root.join(BACKUP_FILE)
    }

    /// Loads every record it can. A missing file yields an empty list; a
    /// record that fails to decode (or collides with one already loaded) is
    /// skipped and logged, and shows up in the report.
    pub fn load_all(&self) -> Result<(WarpList, LoadReport), String> {
        let path = self.warp_path();
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok((WarpList::new(), LoadReport::default()));
            }
            Err(err) => {
                return Err(format!("warp file read failed for {}: {}", path.display(), err));
            }
        };
        let records: Vec<String> = serde_json::from_str(&data)
            .map_err(|err| format!("warp file parse failed for {}: {}", path.display(), err))?;

        let mut warps = WarpList::new();
        let mut report = LoadReport::default();
        for (index, record) in records.iter().enumerate() {
            let warp = match codec::decode(record) {
                Ok(warp) => warp,
                Err(err) => {
                    let detail = format!("record {} skipped: {}", index, err);
                    logging::log_error(&detail);
                    report.errors.push(detail);
                    report.skipped += 1;
                    continue;
                }
            };
            if warps.contains(warp.name()) {
                let detail = format!("record {} skipped: duplicate warp '{}'", index, warp.name());
                logging::log_error(&detail);
                report.errors.push(detail);
                report.skipped += 1;
                continue;
            }
            warps.insert(warp);
            report.loaded += 1;
        }
        Ok((warps, report))
    }

    /// Writes all warps, backing up the previous file first.
    pub fn save_all(&self, warps: &WarpList) -> Result<(), String> {
        fs::create_dir_all(&self.root).map_err(|err| {
            format!("warp dir create failed for {}: {}", self.root.display(), err)
        })?;
        let mut records = Vec::with_capacity(warps.len());
        for warp in warps.iter() {
            let record = codec::encode(warp)
                .map_err(|err| format!("warp '{}' encode failed: {}", warp.name(), err))?;
            records.push(record);
        }
        let data = serde_json::to_string(&records)
            .map_err(|err| format!("warp file encode failed: {}", err))?;

        let path = self.warp_path();
        if path.exists() {
            fs::copy(&path, self.backup_path()).map_err(|err| {
                format!("warp backup failed for {}: {}", self.backup_path().display(), err)
            })?;
        }
        fs::write(&path, data)
            .map_err(|err| format!("warp file write failed for {}: {}", path.display(), err))
    }
}
