//! Line-oriented build session on stdin

use crate::error::Result;
use crate::render::Renderer;
use pcforge_core::BuildSession;
use pcforge_core::CatalogProvider;
use pcforge_core::ComponentCategory;
use std::io::BufRead;
use std::io::Write;
use tracing::debug;

const HELP: &str = "\
Commands:
  categories                 list component categories
  items <category>           list items for a category
  select <category> <item>   choose an item (replaces any earlier choice)
  remove <category>          drop the choice for a category
  clear                      clear the whole build
  show                       list current selections
  summary                    total price and compatibility status
  save                       print the save request body
  help                       this message
  quit                       leave";

enum Step {
    Continue,
    Quit,
}

pub struct Interactive<'a, C: CatalogProvider + ?Sized> {
    catalog: &'a C,
    renderer: &'a Renderer,
    session: BuildSession,
    prompt: bool,
}

impl<'a, C: CatalogProvider + ?Sized> Interactive<'a, C> {
    pub fn new(catalog: &'a C, renderer: &'a Renderer, name: String, prompt: bool) -> Self {
        Self {
            catalog,
            renderer,
            session: BuildSession::new(name),
            prompt,
        }
    }

    pub fn run<R: BufRead, W: Write>(mut self, input: R, out: &mut W) -> Result<BuildSession> {
        if self.prompt {
            writeln!(out, "Type 'help' for commands.")?;
        }
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            match self.execute(line.trim(), out) {
                Ok(Step::Continue) => {}
                Ok(Step::Quit) => break,
                Err(e) => writeln!(out, "error: {e}")?,
            }
        }
        Ok(self.session)
    }

    fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Step> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Step::Continue);
        };
        let args: Vec<&str> = words.collect();
        debug!("interactive command: {command} {args:?}");

        match (command, args.as_slice()) {
            ("quit" | "exit", _) => return Ok(Step::Quit),
            ("help", _) => writeln!(out, "{HELP}")?,
            ("categories", _) => {
                self.renderer
                    .categories(out, &self.catalog.categories(), false)?;
            }
            ("items", [category]) => {
                let category = ComponentCategory::from_id(category)?;
                self.renderer
                    .items(out, category, self.catalog.items(category), false)?;
            }
            ("select", [category, item]) => {
                let displaced = self
                    .session
                    .select_from_catalog(self.catalog, category, item)?;
                let category = ComponentCategory::from_id(category)?;
                match displaced {
                    Some(previous) if previous.id != *item => writeln!(
                        out,
                        "Selected {item} for {category} (replaced {})",
                        previous.id
                    )?,
                    _ => writeln!(out, "Selected {item} for {category}")?,
                }
            }
            ("remove", [category]) => {
                let category = ComponentCategory::from_id(category)?;
                match self.session.remove(category) {
                    Some(item) => writeln!(out, "Removed {} from {category}", item.id)?,
                    None => writeln!(out, "Nothing selected for {category}")?,
                }
            }
            ("clear", []) => {
                self.session.clear();
                writeln!(out, "Build cleared")?;
            }
            ("show", []) => self.renderer.selections(out, &self.session)?,
            ("summary", []) => self.renderer.summary(out, &self.session, false)?,
            ("save", []) => self.renderer.save_request(out, &self.session)?,
            _ => writeln!(out, "Unknown command '{line}'; type 'help' for commands")?,
        }
        Ok(Step::Continue)
    }
}
