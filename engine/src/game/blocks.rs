use std::borrow::Cow;

const BLOCK_NAMES: [(u32, &str); 14] = [
    (2, "Dirt"),
    (4, "Cobblestone"),
    (8, "Deepslate"),
    (16, "Redstone"),
    (32, "Iron Block"),
    (64, "Gold Block"),
    (128, "Diamond Block"),
    (256, "Emerald Block"),
    (512, "Netherite Block"),
    (1024, "Pink Coral Block"),
    (2048, "Beacon"),
    (4096, "End Stone"),
    (8192, "Obsidian"),
    (16384, "Ender Dragon"),
];

pub fn block_name(value: u32) -> Cow<'static, str> {
    BLOCK_NAMES
        .iter()
        .find(|(block_value, _)| *block_value == value)
        .map(|(_, name)| Cow::Borrowed(*name))
        .unwrap_or_else(|| Cow::Owned(format!("Unknown Block ({})", value)))
}
