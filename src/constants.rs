// src/constants.rs
//
// Application-wide constants shared by the persistence core and the CLI.
// Each constant is documented with its purpose and usage context.

/// File name of the shared backing file holding every note record.
///
/// The GUI and the terminal companion read and write the same file; the
/// directory it lives in comes from configuration or the platform default.
///
/// Used in: `lib.rs` (path resolution)
pub const NOTES_FILE_NAME: &str = "sticky_notes.json";

/// Directory name for inline-image assets, created next to the notes file.
///
/// The editing side drops image files here when a user pastes an image;
/// the reconciler removes them once no note references them.
///
/// Used in: `lib.rs` (path resolution)
pub const IMAGE_DIR_NAME: &str = "sticky_notes_images";

/// Application directory name under the platform data and config dirs.
///
/// Used in: `lib.rs` (path resolution, config discovery)
pub const APP_DIR_NAME: &str = "stickypad";

/// File name of the optional TOML configuration file.
///
/// Used in: `lib.rs` (config discovery)
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Header bar color a note gets when its record carries none.
///
/// Records written by the save path always carry explicit colors; the
/// defaults only surface for hand-edited or partially written files.
///
/// Used in: `domain/note.rs` (serde defaults)
pub const DEFAULT_HEADER_BG: &str = "#FFD966";

/// Body background color fallback, see [`DEFAULT_HEADER_BG`].
///
/// Used in: `domain/note.rs` (serde defaults)
pub const DEFAULT_TEXT_BG: &str = "#FFF9C4";

/// Body text color fallback, see [`DEFAULT_HEADER_BG`].
///
/// Used in: `domain/note.rs` (serde defaults)
pub const DEFAULT_TEXT_FG: &str = "#212121";
