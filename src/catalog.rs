//! Asset catalog - the images the pickers offer
//!
//! Names come from two places: the lists in the room config, and the
//! manifest generated at build time from `assets/walls/` and `assets/icons/`
//! (WASM can't enumerate directories at runtime). Names are deduplicated and
//! keep first-seen order.

/// Manifest written by build.rs
const BUILTIN_MANIFEST: &str = include_str!(concat!(env!("OUT_DIR"), "/asset_manifest.txt"));

/// Which picker a set of assets belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Wall and floor textures
    Wall,
    /// Icon images
    Icon,
}

impl AssetKind {
    /// Manifest section header for this kind
    fn section(&self) -> &'static str {
        match self {
            AssetKind::Wall => "walls",
            AssetKind::Icon => "icons",
        }
    }

    /// Directory assets of this kind are loaded from
    pub fn directory(&self) -> &'static str {
        match self {
            AssetKind::Wall => "assets/walls",
            AssetKind::Icon => "assets/icons",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetCatalog {
    wall_textures: Vec<String>,
    icon_assets: Vec<String>,
}

impl AssetCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from configured lists plus the assets found at build time
    pub fn with_builtin(wall_textures: &[String], icon_assets: &[String]) -> Self {
        let mut catalog = Self::new();
        for name in wall_textures {
            catalog.add(AssetKind::Wall, name);
        }
        for name in icon_assets {
            catalog.add(AssetKind::Icon, name);
        }
        let found = catalog.merge_manifest(BUILTIN_MANIFEST);
        tracing::debug!("asset manifest listed {} assets", found);
        catalog
    }

    /// Add a name (ignored if empty or already present)
    pub fn add(&mut self, kind: AssetKind, name: &str) -> bool {
        let name = name.trim();
        let list = self.list_mut(kind);
        if name.is_empty() || list.iter().any(|n| n == name) {
            return false;
        }
        list.push(name.to_string());
        true
    }

    /// Merge a manifest in `[section]` + one-name-per-line format
    ///
    /// Unknown sections and `#` comments are skipped. Returns how many names
    /// the manifest listed.
    pub fn merge_manifest(&mut self, manifest: &str) -> usize {
        let mut current: Option<AssetKind> = None;
        let mut listed = 0;

        for line in manifest.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let section = &line[1..line.len() - 1];
                current = [AssetKind::Wall, AssetKind::Icon]
                    .into_iter()
                    .find(|kind| kind.section() == section);
                continue;
            }

            if let Some(kind) = current {
                listed += 1;
                self.add(kind, line);
            }
        }

        listed
    }

    /// Names of one kind, in catalog order
    pub fn names(&self, kind: AssetKind) -> &[String] {
        match kind {
            AssetKind::Wall => &self.wall_textures,
            AssetKind::Icon => &self.icon_assets,
        }
    }

    pub fn contains(&self, kind: AssetKind, name: &str) -> bool {
        self.names(kind).iter().any(|n| n == name)
    }

    fn list_mut(&mut self, kind: AssetKind) -> &mut Vec<String> {
        match kind {
            AssetKind::Wall => &mut self.wall_textures,
            AssetKind::Icon => &mut self.icon_assets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_manifest() {
        let mut catalog = AssetCatalog::new();
        catalog.add(AssetKind::Wall, "wall1");

        let listed = catalog.merge_manifest(
            "# generated\n[walls]\nbrick\nwall1\n\n[icons]\nstar\nmoon\n\n[sounds]\nding\n",
        );

        assert_eq!(listed, 4);
        assert_eq!(catalog.names(AssetKind::Wall), &["wall1", "brick"]);
        assert_eq!(catalog.names(AssetKind::Icon), &["star", "moon"]);
        assert!(!catalog.contains(AssetKind::Icon, "ding"));
    }

    #[test]
    fn test_add_dedupes() {
        let mut catalog = AssetCatalog::new();
        assert!(catalog.add(AssetKind::Icon, "star"));
        assert!(!catalog.add(AssetKind::Icon, "star"));
        assert!(!catalog.add(AssetKind::Icon, "  "));
        // Same name under a different kind is separate
        assert!(catalog.add(AssetKind::Wall, "star"));
    }

    #[test]
    fn test_lines_before_any_section_are_ignored() {
        let mut catalog = AssetCatalog::new();
        assert_eq!(catalog.merge_manifest("orphan\n[icons]\nleaf\n"), 1);
        assert_eq!(catalog.names(AssetKind::Icon), &["leaf"]);
        assert!(catalog.names(AssetKind::Wall).is_empty());
    }

    #[test]
    fn test_with_builtin_keeps_config_order() {
        let walls = vec!["wall2".to_string(), "wall1".to_string()];
        let icons = vec!["star".to_string()];
        let catalog = AssetCatalog::with_builtin(&walls, &icons);
        assert_eq!(&catalog.names(AssetKind::Wall)[..2], &["wall2", "wall1"]);
        assert_eq!(catalog.names(AssetKind::Icon)[0], "star");
    }
}
