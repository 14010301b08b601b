//! Human-readable and JSON output

use crate::error::Result;
use owo_colors::OwoColorize;
use pcforge_core::BuildSession;
use pcforge_core::BuildSummary;
use pcforge_core::BuilderConfig;
use pcforge_core::CatalogItem;
use pcforge_core::CategoryInfo;
use pcforge_core::CompatibilityStatus;
use pcforge_core::ComponentCategory;
use pcforge_core::Price;
use serde_json::json;
use std::io::Write;

pub struct Renderer {
    currency_symbol: String,
    color: bool,
}

impl Renderer {
    pub fn new(config: &BuilderConfig, color: bool) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            color,
        }
    }

    fn price(&self, price: Price) -> String {
        format!("{}{}", self.currency_symbol, price)
    }

    fn status(&self, summary: &BuildSummary) -> String {
        let label = summary.compatibility.label;
        if !self.color {
            return label.to_string();
        }
        match summary.compatibility.status {
            CompatibilityStatus::None => label.dimmed().to_string(),
            CompatibilityStatus::Incomplete => label.yellow().to_string(),
            CompatibilityStatus::Compatible => label.green().to_string(),
            CompatibilityStatus::Incompatible => label.red().to_string(),
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn categories<W: Write>(
        &self,
        out: &mut W,
        categories: &[CategoryInfo],
        as_json: bool,
    ) -> Result<()> {
        if as_json {
            serde_json::to_writer_pretty(&mut *out, categories)?;
            writeln!(out)?;
            return Ok(());
        }
        for info in categories {
            writeln!(out, "{:<18} {:<18} {}", info.id, info.name, info.description)?;
        }
        Ok(())
    }

    pub fn items<W: Write>(
        &self,
        out: &mut W,
        category: ComponentCategory,
        items: &[CatalogItem],
        as_json: bool,
    ) -> Result<()> {
        if as_json {
            serde_json::to_writer_pretty(&mut *out, items)?;
            writeln!(out)?;
            return Ok(());
        }
        writeln!(out, "{}", self.heading(category.name()))?;
        if items.is_empty() {
            writeln!(out, "  (no items)")?;
        }
        for item in items {
            writeln!(
                out,
                "  {:<22} {:<32} {:>10}  {}",
                item.id,
                format!("{} {}", item.brand, item.name),
                self.price(item.price),
                item.attributes.headline()
            )?;
        }
        Ok(())
    }

    /// Current selections, one line per category
    pub fn selections<W: Write>(&self, out: &mut W, session: &BuildSession) -> Result<()> {
        let selections = session.selections();
        if selections.is_empty() {
            writeln!(out, "No components selected")?;
            return Ok(());
        }
        for (category, item) in &selections {
            writeln!(
                out,
                "  {:<18} {:<32} {:>10}",
                category.name(),
                format!("{} {}", item.brand, item.name),
                self.price(item.price)
            )?;
        }
        Ok(())
    }

    pub fn summary<W: Write>(
        &self,
        out: &mut W,
        session: &BuildSession,
        as_json: bool,
    ) -> Result<()> {
        let summary = session.summary();
        if as_json {
            let value = json!({
                "id": session.id(),
                "name": session.name(),
                "selections": session.selections(),
                "summary": summary,
            });
            serde_json::to_writer_pretty(&mut *out, &value)?;
            writeln!(out)?;
            return Ok(());
        }

        writeln!(out, "{}", self.heading(&format!("Build: {}", session.name())))?;
        self.selections(out, session)?;
        writeln!(out, "Total: {}", self.price(summary.total_price))?;
        writeln!(
            out,
            "Status: {} ({}/{} selected)",
            self.status(&summary),
            summary.selected_count,
            summary.total_categories
        )?;
        if summary.estimated_power_draw_watts > 0 {
            writeln!(
                out,
                "Estimated power draw: {} W",
                summary.estimated_power_draw_watts
            )?;
        }
        if !summary.missing.is_empty() {
            let missing: Vec<_> = summary.missing.iter().map(|c| c.id()).collect();
            writeln!(out, "Missing: {}", missing.join(", "))?;
        }
        Ok(())
    }

    pub fn save_request<W: Write>(&self, out: &mut W, session: &BuildSession) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, &session.save_request())?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcforge_core::StaticCatalog;
    use pretty_assertions::assert_eq;

    fn render(f: impl FnOnce(&Renderer, &mut Vec<u8>) -> Result<()>) -> String {
        let renderer = Renderer::new(&BuilderConfig::default(), false);
        let mut out = Vec::new();
        f(&renderer, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_summary() {
        let session = BuildSession::new("Empty");
        let text = render(|r, out| r.summary(out, &session, false));
        assert!(text.starts_with("Build: Empty\nNo components selected\nTotal: $0.00\n"));
        assert!(text.contains("Status: No components selected (0/12 selected)"));
        assert!(!text.contains("Estimated power draw"));
    }

    #[test]
    fn summary_lists_selections_and_total() {
        let catalog = StaticCatalog::builtin();
        let mut session = BuildSession::new("Gaming");
        session
            .select_from_catalog(&catalog, "cpu", "ryzen-5-7600")
            .unwrap();
        session
            .select_from_catalog(&catalog, "gpu", "rx-7800-xt")
            .unwrap();

        let text = render(|r, out| r.summary(out, &session, false));
        assert!(text.contains("AMD Ryzen 5 7600"));
        assert!(text.contains("Total: $728.99"));
        assert!(text.contains("Status: Build Incomplete (2/12 selected)"));
        assert!(text.contains("Estimated power draw: 328 W"));
    }

    #[test]
    fn save_request_is_json() {
        let catalog = StaticCatalog::builtin();
        let mut session = BuildSession::new("Saved");
        session
            .select_from_catalog(&catalog, "os", "ubuntu-24-04")
            .unwrap();
        let text = render(|r, out| r.save_request(out, &session));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["selections"]["operating-system"], "ubuntu-24-04");
    }
}
