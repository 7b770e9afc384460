// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tags command implementation.

use tracing::debug;

use crate::cli::build::TagsArgs;
use crate::config::Config;
use crate::wheel::tags::{TagOverride, WheelTag, finalize_tag};

/// Computes the final tag for the configuration and an optional CLI platform.
#[must_use]
pub fn wheel_tag(config: &Config, plat_name: Option<&str>) -> WheelTag {
    let tag_override = TagOverride::default();
    let tag = finalize_tag(
        &tag_override,
        plat_name.or(config.wheel.plat_name.as_deref()),
    );
    debug!(tag = %tag, root_is_pure = tag_override.root_is_pure, "Wheel tag");
    tag
}

/// Lines printed by the `tags` command.
#[must_use]
pub fn format_tags(tag: &WheelTag, expand: bool) -> Vec<String> {
    if expand {
        tag.expand()
    } else {
        vec![tag.to_string()]
    }
}

/// Main handler for tags command.
pub fn run_tags_command(args: &TagsArgs, config: &Config) {
    let tag = wheel_tag(config, args.platform.plat_name.as_deref());
    for line in format_tags(&tag, args.expand) {
        println!("{line}");
    }
}
