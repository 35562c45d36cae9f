//! Init command: write a starter `svgstash.toml`.

use crate::config::StashConfig;
use crate::log;
use anyhow::{Context, Result};
use std::fs;

/// Default configuration written by `svgstash init`.
const CONFIG_TEMPLATE: &str = r#"# svgstash configuration

[input]
# Files or directories, merged in this order.
paths = ["icons"]

[output]
file = "sprite.svg"
# formatting = { indent_size = 2 }

[merge]
# prefix = "icon-"
# inherit_viewbox = true
# cleanup = ["style", "fill"]

# [merge.fixed_size]
# width = 50
# height = 50

[preview]
enable = false
"#;

/// Create the config file; refuses to clobber an existing one unless forced.
pub fn init_config(config: &StashConfig, force: bool) -> Result<()> {
    let path = &config.config_path;

    if path.exists() && !force {
        log!(
            "error";
            "{} already exists (use --force to overwrite)",
            path.display()
        );
        std::process::exit(1);
    }

    fs::write(path, CONFIG_TEMPLATE)
        .with_context(|| format!("writing {}", path.display()))?;
    log!("init"; "created {}", path.display());
    Ok(())
}
