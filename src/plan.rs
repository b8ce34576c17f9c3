//! Static icon configuration tables.
//!
//! Every output the generators produce is enumerated here as data: the core
//! app icons, the Windows Store logo set, the ICO frame sizes, and the macOS
//! iconset resolution/name pairs. The batch drivers iterate these tables and
//! never compute filenames at runtime.

/// One entry in the icon configuration table.
///
/// Entries are order-insensitive except for log readability; filenames are
/// unique within each run by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconEntry {
    /// Target size in pixels (icons are always square).
    pub size: u32,

    /// Output filename, relative to the output directory.
    pub file_name: &'static str,

    /// Whether to clip the corners with a rounded-rectangle alpha mask.
    pub rounded: bool,

    /// Whether to composite a drop shadow beneath the icon.
    ///
    /// Only the vector pipeline honors this flag; the procedural pipeline
    /// saves its renders flat.
    pub shadow: bool,

    /// Human-readable description, printed as the entry is generated.
    pub label: &'static str,
}

impl IconEntry {
    const fn new(
        size: u32,
        file_name: &'static str,
        rounded: bool,
        shadow: bool,
        label: &'static str,
    ) -> Self {
        Self {
            size,
            file_name,
            rounded,
            shadow,
            label,
        }
    }
}

/// Core application icons, including the 512 px base image (`icon.png`) that
/// feeds the bundle packagers.
pub const CORE_ICONS: [IconEntry; 4] = [
    IconEntry::new(32, "32x32.png", false, false, "Small app icon"),
    IconEntry::new(128, "128x128.png", true, true, "Medium app icon"),
    IconEntry::new(256, "128x128@2x.png", true, true, "Retina medium icon"),
    IconEntry::new(512, "icon.png", true, true, "Large app icon"),
];

/// Windows Store logo set. All rounded, none shadowed.
pub const STORE_LOGOS: [IconEntry; 10] = [
    IconEntry::new(30, "Square30x30Logo.png", true, false, "Windows Store 30x30"),
    IconEntry::new(44, "Square44x44Logo.png", true, false, "Windows Store 44x44"),
    IconEntry::new(71, "Square71x71Logo.png", true, false, "Windows Store 71x71"),
    IconEntry::new(89, "Square89x89Logo.png", true, false, "Windows Store 89x89"),
    IconEntry::new(107, "Square107x107Logo.png", true, false, "Windows Store 107x107"),
    IconEntry::new(142, "Square142x142Logo.png", true, false, "Windows Store 142x142"),
    IconEntry::new(150, "Square150x150Logo.png", true, false, "Windows Store 150x150"),
    IconEntry::new(284, "Square284x284Logo.png", true, false, "Windows Store 284x284"),
    IconEntry::new(310, "Square310x310Logo.png", true, false, "Windows Store 310x310"),
    IconEntry::new(50, "StoreLogo.png", true, false, "Windows Store logo"),
];

/// Frame sizes packed into the multi-resolution ICO.
pub const ICO_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Resolution/name pairs Apple requires inside an `.iconset` staging
/// directory before `iconutil` will compile it into an ICNS bundle.
///
/// The 1024 px entry is upscaled from the 512 px base.
pub const ICONSET_SIZES: [(u32, &str); 10] = [
    (16, "icon_16x16.png"),
    (32, "icon_16x16@2x.png"),
    (32, "icon_32x32.png"),
    (64, "icon_32x32@2x.png"),
    (128, "icon_128x128.png"),
    (256, "icon_128x128@2x.png"),
    (256, "icon_256x256.png"),
    (512, "icon_256x256@2x.png"),
    (512, "icon_512x512.png"),
    (1024, "icon_512x512@2x.png"),
];
