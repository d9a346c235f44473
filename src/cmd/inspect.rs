//! Single note inspection command

use std::path::Path;

use emx_hexo::{ConvertConfig, Converter, SkipReason};

pub fn run(source: &str, base: &str, note: &str, json: bool) -> emx_hexo::Result<()> {
    let converter = Converter::new(ConvertConfig::new(source, ".", base));

    let inspection = match converter.inspect(Path::new(note))? {
        Ok(inspection) => inspection,
        Err(reason) => {
            let why = match reason {
                SkipReason::Unsafe(target) => format!("resolves outside the vault ({})", target.display()),
                SkipReason::Dangling => "points to a missing file".to_string(),
                SkipReason::NotPublic(platform) => format!("is not published on {platform}"),
            };
            println!("{note} would be skipped: {why}");
            return Ok(());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&inspection)?);
        return Ok(());
    }

    println!("file:        {}", inspection.file);
    println!("resolved:    {}", inspection.resolved_path);
    println!("title:       {}", inspection.title);
    println!(
        "date:        {} ({})",
        inspection.date.value.format("%Y-%m-%d %H:%M:%S"),
        inspection.date.source
    );
    println!("categories:  {}", inspection.categories.join(" / "));
    println!("tags:        {}", inspection.tags.join(", "));
    println!("permalink:   {}", inspection.permalink);
    println!("output:      {}", inspection.output_filename);
    if let Some(targets) = inspection.metadata.public() {
        println!("public:      {}", targets.join(", "));
    }

    Ok(())
}
