//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuDownload as Download, LuFolder as Folder, LuLock as Vault, LuLogOut as Logout,
        LuShare2 as Share, LuTrash2 as Delete, LuUpload as Upload, LuUser as User,
        LuUsers as Shared,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowRight as Logout, BsDownload as Download, BsFolderFill as Folder,
        BsLockFill as Vault, BsPeople as Shared, BsPerson as User, BsShare as Share,
        BsTrash as Delete, BsUpload as Upload,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(VAULT, Vault);
themed_icon!(USER, User);
themed_icon!(FOLDER, Folder);
themed_icon!(SHARED, Shared);
themed_icon!(LOGOUT, Logout);
themed_icon!(UPLOAD, Upload);
themed_icon!(DOWNLOAD, Download);
themed_icon!(DELETE, Delete);
themed_icon!(SHARE, Share);
