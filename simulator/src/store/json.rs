use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use wificore::model::Hotspot;

/// File-backed placement store: one pretty-printed JSON array per label,
/// order-preserving so hotspot indices survive a save/load round trip.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, label: &str) -> PathBuf {
        self.dir.join(format!("{label}.json"))
    }

    pub fn save(&self, hotspots: &[Hotspot], label: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating store directory {}", self.dir.display()))?;
        let path = self.path_for(label);
        let contents = serde_json::to_string_pretty(hotspots)
            .context("serializing hotspot placement")?;
        fs::write(&path, contents)
            .with_context(|| format!("writing placement {}", path.display()))?;
        Ok(())
    }

    pub fn load(&self, label: &str) -> anyhow::Result<Vec<Hotspot>> {
        let path = self.path_for(label);
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("reading placement {}", path.display()))?;
        let hotspots: Vec<Hotspot> = serde_json::from_str(&contents)
            .with_context(|| format!("parsing placement {}", path.display()))?;
        Ok(hotspots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_preserves_order_and_fields() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let hotspots = vec![
            Hotspot::new(12.5, 800.0, 3),
            Hotspot::new(0.0, 0.0, 1),
            Hotspot::new(4999.9, 1.0, 5),
        ];

        store.save(&hotspots, "initial").unwrap();
        let loaded = store.load("initial").unwrap();
        assert_eq!(loaded, hotspots);
    }

    #[test]
    fn labels_map_to_distinct_files() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let first = vec![Hotspot::new(1.0, 2.0, 1)];
        let second = vec![Hotspot::new(3.0, 4.0, 2)];

        store.save(&first, "hotspots").unwrap();
        store.save(&second, "hotspots_optimized").unwrap();
        assert_eq!(store.load("hotspots").unwrap(), first);
        assert_eq!(store.load("hotspots_optimized").unwrap(), second);
    }

    #[test]
    fn missing_label_reports_path() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let err = store.load("nope").unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }
}
