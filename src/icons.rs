/*!
 * File-type icons
 *
 * Maps an entry to a Nerd Font glyph and an optional color. Rules are tried
 * in order and the first match wins: hidden shell configuration files, then
 * the extension table, then the directory and generic fallbacks.
 */

use std::collections::HashMap;
use std::io;

use once_cell::sync::Lazy;
use owo_colors::Style;
use strum::{EnumIter, EnumProperty, IntoEnumIterator};

use crate::types::EntryKind;

/// Glyph for a directory with children
pub const FOLDER_GLYPH: &str = "\u{f07b}";
/// Glyph for a directory without children
pub const EMPTY_FOLDER_GLYPH: &str = "\u{f114}";
/// Glyph for files no other rule matches
pub const GENERIC_FILE_GLYPH: &str = "\u{e64e}";

/// Highlight applied to an icon and the name after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconColor {
    /// Executable regular files
    Executable,
    /// Directories matched by the folder fallback
    Directory,
}

impl IconColor {
    /// Terminal style for this color
    pub fn style(self) -> Style {
        match self {
            Self::Executable => Style::new().green(),
            Self::Directory => Style::new().blue(),
        }
    }
}

/// A resolved icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub glyph: &'static str,
    pub color: Option<IconColor>,
}

impl Icon {
    const fn plain(glyph: &'static str) -> Self {
        Self { glyph, color: None }
    }
}

/// Shell configuration files recognized by name prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumProperty)]
pub enum ShellConfig {
    #[strum(props(prefix = ".bash", glyph = "\u{ebca}"))]
    Bash,
    #[strum(props(prefix = ".zsh", glyph = "\u{e691}"))]
    Zsh,
    #[strum(props(prefix = ".vim", glyph = "\u{e7c5}"))]
    Vim,
}

impl ShellConfig {
    /// Name prefix identifying this shell's files
    pub fn prefix(&self) -> &'static str {
        self.get_str("prefix").unwrap_or_default()
    }

    /// Glyph shown for this shell's files
    pub fn glyph(&self) -> &'static str {
        self.get_str("glyph").unwrap_or(GENERIC_FILE_GLYPH)
    }

    /// The shell whose configuration prefix `name` starts with
    pub fn detect(name: &str) -> Option<Self> {
        Self::iter().find(|shell| name.starts_with(shell.prefix()))
    }
}

/// Extension to glyph table
pub static EXTENSION_ICONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("c", "\u{e61e}"),
        ("cpp", "\u{e61d}"),
        ("java", "\u{e738}"),
        ("py", "\u{e73c}"),
        ("js", "\u{f2ef}"),
        ("ts", "\u{e69d}"),
        ("html", "\u{e736}"),
        ("css", "\u{e749}"),
        ("php", "\u{e73d}"),
        ("rb", "\u{e739}"),
        ("swift", "\u{e755}"),
        ("go", "\u{e65e}"),
        ("rust", "\u{e7a8}"),
        ("rs", "\u{e7a8}"),
        ("dart", "\u{e64c}"),
        ("kt", "\u{e634}"),
        ("csharp", "\u{e648}"),
        ("cs", "\u{e648}"),
        ("lua", "\u{e620}"),
        ("perl", "\u{e769}"),
        ("sh", "\u{e691}"),
        ("ps1", "\u{ebc7}"),
        ("asm", "\u{e637}"),
        ("json", "\u{eb0f}"),
        ("xml", "\u{e619}"),
        ("toml", "\u{e6b2}"),
        ("md", "\u{e73e}"),
        ("txt", "\u{f15c}"),
        ("rst", "\u{f15c}"),
        ("tex", "\u{f15c}"),
        ("csv", "\u{eefc}"),
        ("ini", "\u{e615}"),
        ("cfg", "\u{e615}"),
        ("conf", "\u{e615}"),
        ("properties", "\u{e615}"),
        ("env", "\u{e615}"),
        ("sql", "\u{f1c0}"),
        ("db", "\u{f1c0}"),
        ("sqlite", "\u{e7c4}"),
        ("xls", "\u{e6a6}"),
        ("xlsx", "\u{e6a6}"),
        ("gitignore", "\u{e702}"),
        ("gitattributes", "\u{e702}"),
        ("png", "\u{f03e}"),
        ("jpg", "\u{f03e}"),
        ("gif", "\u{f03e}"),
        ("svg", "\u{f03e}"),
        ("mp4", "\u{f1c8}"),
        ("mp3", "\u{f1c7}"),
        ("makefile", "\u{e673}"),
        ("gradle", "\u{e660}"),
        ("maven", "\u{e674}"),
        ("pkg", "\u{f487}"),
        ("deb", "\u{e77d}"),
        ("pdf", "\u{f1c1}"),
        ("rtf", "\u{f15c}"),
        ("zip", "\u{f1c6}"),
        ("tar", "\u{f1c6}"),
        ("gz", "\u{f1c6}"),
        ("bz2", "\u{f1c6}"),
        ("dockerfile", "\u{f21f}"),
        ("ejs", "\u{e618}"),
        ("twig", "\u{e61c}"),
        ("pug", "\u{e686}"),
        ("vue", "\u{e6a0}"),
        ("psd", "\u{e7b8}"),
        ("ai", "\u{e7b4}"),
        ("sketch", "\u{ef64}"),
        ("unity", "\u{e721}"),
        ("prefab", "\u{e721}"),
        ("editorconfig", "\u{e652}"),
        ("npmrc", "\u{e71e}"),
        ("yarnrc", "\u{e6a7}"),
        ("babelrc", "\u{e639}"),
        ("eslintrc", "\u{e655}"),
        ("lock", "\u{f023}"),
        ("key", "\u{eb11}"),
        ("ttf", "\u{f031}"),
        ("otf", "\u{f031}"),
        ("woff", "\u{f031}"),
        ("sav", "\u{f0c7}"),
        ("zsh", "\u{e691}"),
        ("vim", "\u{e7c5}"),
    ])
});

/// Lookup key for the extension table: the text after the last `.`, or the
/// whole name when it has no dot
pub fn extension_key(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Resolve the icon for an entry.
///
/// `dir_is_empty` is only called when a directory falls through to the
/// folder fallback.
pub fn classify<F>(name: &str, kind: EntryKind, dir_is_empty: F) -> io::Result<Icon>
where
    F: FnOnce() -> io::Result<bool>,
{
    if let Some(shell) = ShellConfig::detect(name) {
        return Ok(Icon::plain(shell.glyph()));
    }

    let by_extension = EXTENSION_ICONS.get(extension_key(name)).copied();
    let icon = match (by_extension, kind) {
        (Some(glyph), EntryKind::Executable) => Icon {
            glyph,
            color: Some(IconColor::Executable),
        },
        (Some(glyph), _) => Icon::plain(glyph),
        (None, EntryKind::Directory) => Icon {
            glyph: if dir_is_empty()? {
                EMPTY_FOLDER_GLYPH
            } else {
                FOLDER_GLYPH
            },
            color: Some(IconColor::Directory),
        },
        (None, _) => Icon::plain(GENERIC_FILE_GLYPH),
    };
    Ok(icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never_probed() -> io::Result<bool> {
        panic!("directory probe should not run")
    }

    #[test]
    fn shell_configs_win_over_extensions() {
        let icon = classify(".bashrc", EntryKind::File, never_probed).unwrap();
        assert_eq!(icon, Icon::plain("\u{ebca}"));

        let icon = classify(".zsh_history.txt", EntryKind::Executable, never_probed).unwrap();
        assert_eq!(icon, Icon::plain("\u{e691}"));

        let icon = classify(".vim", EntryKind::Directory, never_probed).unwrap();
        assert_eq!(icon, Icon::plain("\u{e7c5}"));
    }

    #[test]
    fn known_extensions_use_the_table() {
        let icon = classify("main.rs", EntryKind::File, never_probed).unwrap();
        assert_eq!(icon, Icon::plain("\u{e7a8}"));

        let icon = classify("archive.tar.gz", EntryKind::File, never_probed).unwrap();
        assert_eq!(icon, Icon::plain("\u{f1c6}"));
    }

    #[test]
    fn executables_with_known_extension_are_colored() {
        let icon = classify("run.sh", EntryKind::Executable, never_probed).unwrap();
        assert_eq!(icon.glyph, "\u{e691}");
        assert_eq!(icon.color, Some(IconColor::Executable));
    }

    #[test]
    fn directories_with_known_extension_stay_uncolored() {
        let icon = classify("config.d.toml", EntryKind::Directory, never_probed).unwrap();
        assert_eq!(icon, Icon::plain("\u{e6b2}"));
    }

    #[test]
    fn dotless_names_are_looked_up_whole() {
        assert_eq!(extension_key("makefile"), "makefile");
        let icon = classify("makefile", EntryKind::File, never_probed).unwrap();
        assert_eq!(icon.glyph, "\u{e673}");

        // Lookup is case-sensitive.
        let icon = classify("Makefile", EntryKind::File, never_probed).unwrap();
        assert_eq!(icon.glyph, GENERIC_FILE_GLYPH);
    }

    #[test]
    fn unknown_extensions_fall_back() {
        for kind in [EntryKind::File, EntryKind::Executable] {
            let icon = classify("data.unknownext", kind, never_probed).unwrap();
            assert_eq!(icon, Icon::plain(GENERIC_FILE_GLYPH));
        }
    }

    #[test]
    fn empty_and_full_directories_differ() {
        let empty = classify("build", EntryKind::Directory, || Ok(true)).unwrap();
        let full = classify("build", EntryKind::Directory, || Ok(false)).unwrap();
        assert_eq!(empty.glyph, EMPTY_FOLDER_GLYPH);
        assert_eq!(full.glyph, FOLDER_GLYPH);
        assert_eq!(empty.color, Some(IconColor::Directory));
        assert_eq!(full.color, Some(IconColor::Directory));
    }

    #[test]
    fn probe_failures_propagate() {
        let result = classify("..", EntryKind::Directory, || {
            Err(io::Error::from(io::ErrorKind::PermissionDenied))
        });
        assert!(result.is_err());
    }

    #[test]
    fn every_table_entry_classifies_deterministically() {
        for (ext, glyph) in EXTENSION_ICONS.iter() {
            let name = format!("file.{ext}");
            for _ in 0..2 {
                let icon = classify(&name, EntryKind::File, never_probed).unwrap();
                assert_eq!(icon, Icon::plain(*glyph));
            }
        }
        assert!(EXTENSION_ICONS.len() >= 80);
    }

    #[test]
    fn shell_config_props_are_present() {
        for shell in ShellConfig::iter() {
            assert!(shell.prefix().starts_with('.'));
            assert_ne!(shell.glyph(), GENERIC_FILE_GLYPH);
        }
    }
}
