use serde::{Deserialize, Serialize};

/// Number of addressable lore rows on a warp icon.
pub const LORE_ROWS: usize = 3;

/// Material given to newly created warp icons.
pub const DEFAULT_ICON_MATERIAL: &str = "conduit";

const AIR: &str = "air";

/// Host material tag, lowercase. The set of valid tags is the host's
/// business; the core only distinguishes air from everything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Material(String);

impl Material {
    pub fn new(tag: impl Into<String>) -> Self {
        Material(tag.into().to_ascii_lowercase())
    }

    pub fn air() -> Self {
        Material(AIR.to_string())
    }

    pub fn is_air(&self) -> bool {
        self.0 == AIR
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The selection-GUI descriptor for a warp: what item it shows up as, the
/// capitalized warp name it displays, and three rows of lore text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemIcon {
    pub material: Material,
    pub quantity: u16,
    pub display_name: String,
    pub lore: [String; LORE_ROWS],
}

impl ItemIcon {
    /// Default icon for a freshly created warp.
    pub fn for_warp(warp_name: &str) -> Self {
        Self {
            material: Material::new(DEFAULT_ICON_MATERIAL),
            quantity: 1,
            display_name: capitalize(warp_name),
            lore: Default::default(),
        }
    }

    /// Re-derives the display name after a warp rename.
    pub fn sync_display_name(&mut self, warp_name: &str) {
        self.display_name = capitalize(warp_name);
    }

    /// Swaps the shown material, keeping quantity, display name and lore.
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    /// Writes one lore row. `row` is 1-indexed in `[1, 3]`; anything else is
    /// a caller bug, not user input, and panics.
    pub fn set_lore_row(&mut self, row: usize, line: impl Into<String>) {
        if row < 1 || row > LORE_ROWS {
            panic!("lore row {} out of range 1..={}", row, LORE_ROWS);
        }
        self.lore[row - 1] = line.into();
    }
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_icon_uses_conduit_and_capitalized_name() {
        let icon = ItemIcon::for_warp("spawn");
        assert_eq!(icon.material, Material::new("conduit"));
        assert_eq!(icon.quantity, 1);
        assert_eq!(icon.display_name, "Spawn");
        assert_eq!(icon.lore, ["", "", ""]);
    }

    #[test]
    fn material_tags_normalize_to_lowercase() {
        assert_eq!(Material::new("DIAMOND_BLOCK"), Material::new("diamond_block"));
        assert!(Material::new("Air").is_air());
        assert!(!Material::new("stone").is_air());
    }

    #[test]
    fn lore_rows_are_one_indexed() {
        let mut icon = ItemIcon::for_warp("mine");
        icon.set_lore_row(1, "first");
        icon.set_lore_row(3, "third");
        assert_eq!(icon.lore, ["first", "", "third"]);
    }

    #[test]
    #[should_panic(expected = "lore row 0 out of range")]
    fn lore_row_zero_panics() {
        ItemIcon::for_warp("mine").set_lore_row(0, "bad");
    }

    #[test]
    #[should_panic(expected = "lore row 4 out of range")]
    fn lore_row_four_panics() {
        ItemIcon::for_warp("mine").set_lore_row(4, "bad");
    }

    #[test]
    fn set_material_keeps_everything_else() {
        let mut icon = ItemIcon::for_warp("base");
        icon.set_lore_row(2, "home sweet home");
        icon.set_material(Material::new("beacon"));
        assert_eq!(icon.material, Material::new("beacon"));
        assert_eq!(icon.display_name, "Base");
        assert_eq!(icon.lore[1], "home sweet home");
    }

    #[test]
    fn capitalize_handles_edge_cases() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize("already Caps"), "Already Caps");
    }
}
