//! The four icon assets produced by both pipelines.

use std::fmt;

/// Role of a generated icon asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconVariant {
    /// Store / iOS app icon. Opaque.
    AppIcon,
    /// Android adaptive icon foreground. Transparent background.
    AdaptiveIcon,
    /// Splash screen artwork. Opaque.
    Splash,
    /// Web favicon. Transparent background.
    Favicon,
}

impl IconVariant {
    /// All variants in output order.
    pub const ALL: [IconVariant; 4] = [
        IconVariant::AppIcon,
        IconVariant::AdaptiveIcon,
        IconVariant::Splash,
        IconVariant::Favicon,
    ];

    /// Output file name.
    pub fn file_name(self) -> &'static str {
        match self {
            IconVariant::AppIcon => "icon.png",
            IconVariant::AdaptiveIcon => "adaptive-icon.png",
            IconVariant::Splash => "splash-icon.png",
            IconVariant::Favicon => "favicon.png",
        }
    }

    /// Final edge length in pixels (all assets are square).
    pub fn size(self) -> u32 {
        match self {
            IconVariant::Favicon => 48,
            _ => 1024,
        }
    }

    /// Whether the written PNG carries an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(self, IconVariant::AdaptiveIcon | IconVariant::Favicon)
    }
}

impl fmt::Display for IconVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IconVariant::AppIcon => "app icon",
            IconVariant::AdaptiveIcon => "adaptive icon",
            IconVariant::Splash => "splash icon",
            IconVariant::Favicon => "favicon",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_unique() {
        let mut names: Vec<_> = IconVariant::ALL.iter().map(|v| v.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_sizes() {
        assert_eq!(IconVariant::AppIcon.size(), 1024);
        assert_eq!(IconVariant::Favicon.size(), 48);
    }

    #[test]
    fn test_alpha_channels() {
        assert!(!IconVariant::AppIcon.has_alpha());
        assert!(IconVariant::AdaptiveIcon.has_alpha());
        assert!(!IconVariant::Splash.has_alpha());
        assert!(IconVariant::Favicon.has_alpha());
    }
}
