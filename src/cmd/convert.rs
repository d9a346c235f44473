//! Batch conversion command

use emx_hexo::{log, util, ConvertConfig, Converter};

pub fn run(config: ConvertConfig, json: bool) -> emx_hexo::Result<()> {
    let output_dir = config.output_dir.clone();
    let summary = Converter::new(config).run()?;

    if json {
        let value = serde_json::json!({
            "converted": summary.records,
            "skipped": summary.skipped.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            "failed": summary
                .failed
                .iter()
                .map(|(name, error)| serde_json::json!({ "file": name, "error": error }))
                .collect::<Vec<_>>(),
            "report": summary.report_path.as_deref().map(util::display_path),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    log!(
        "convert";
        "🎉 done: {} converted, {} skipped, {} failed",
        summary.records.len(),
        summary.skipped.len(),
        summary.failed.len()
    );
    log!("convert"; "posts saved to {}", util::display_path(&output_dir));
    if !summary.records.is_empty() {
        log!("convert"; "next: run `npx hexo generate` to build the site");
    }

    Ok(())
}
