//! Implementation of the `sprout list` command.

use sprout_core::application::LayoutInfo;

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let layouts = super::layout_service(&config)?.list_info()?;

    // --output-format json implies the JSON listing.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available Layouts:")?;
            for line in table_lines(&layouts) {
                output.print(&line)?;
            }
        }
        ListFormat::Json => output.json(&layouts)?,
        ListFormat::List => {
            for layout in &layouts {
                output.print(&layout.name)?;
            }
        }
    }

    Ok(())
}

fn table_lines(layouts: &[LayoutInfo]) -> Vec<String> {
    let width = layouts.iter().map(|l| l.name.len()).max().unwrap_or(0);
    layouts
        .iter()
        .map(|l| {
            let origin = if l.builtin { "built-in" } else { "custom" };
            format!(
                "  {:<width$}  {:<8}  {} dir(s), {} file(s)  {}",
                l.name, origin, l.directories, l.files, l.description
            )
            .trim_end()
            .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, builtin: bool) -> LayoutInfo {
        LayoutInfo {
            name: name.into(),
            description: String::new(),
            builtin,
            directories: 1,
            files: 2,
        }
    }

    #[test]
    fn table_aligns_names() {
        let lines = table_lines(&[info("html", true), info("go-service", false)]);
        assert_eq!(lines[0], "  html        built-in  1 dir(s), 2 file(s)");
        assert!(lines[1].starts_with("  go-service  custom  "));
    }

    #[test]
    fn empty_catalog_has_no_lines() {
        assert!(table_lines(&[]).is_empty());
    }
}
