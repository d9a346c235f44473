//! Symlink safety check command

use emx_hexo::{log, util, ConvertConfig, Converter, SourceResolution};

pub fn run(source: &str, base: &str, json: bool) -> emx_hexo::Result<()> {
    let config = ConvertConfig::new(source, ".", base);
    let base_dir = config.base_dir.clone();
    let links = Converter::new(config).check_links()?;

    if json {
        let entries: Vec<_> = links
            .iter()
            .map(|(name, resolution)| {
                let (target, safe) = match resolution {
                    SourceResolution::Linked { target, .. } => (Some(util::display_path(target)), true),
                    SourceResolution::Escapes { target, .. } => (Some(util::display_path(target)), false),
                    _ => (None, false),
                };
                serde_json::json!({ "file": name, "target": target, "safe": safe })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    log!("check"; "🔒 checking links against {}", util::display_path(&base_dir));

    let mut unsafe_count = 0;
    for (name, resolution) in &links {
        match resolution {
            SourceResolution::Linked { target, .. } => {
                log!("check"; "✅ {} -> {}", name, util::display_path(target));
            }
            SourceResolution::Escapes { target, .. } => {
                unsafe_count += 1;
                log!("check"; "❌ {} -> {}", name, util::display_path(target));
                log!("warn"; "{} resolves outside the vault", name);
            }
            SourceResolution::Dangling(_) => {
                unsafe_count += 1;
                log!("warn"; "{} points to a missing file", name);
            }
            SourceResolution::Regular(_) => {}
        }
    }

    log!("check"; "{} link(s), {} unsafe", links.len(), unsafe_count);
    Ok(())
}
