use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use mealplanner_catalog::{AddMealInput, Catalog};
use mealplanner_mealplan::{Planner, Selection};
use mealplanner_shared::{Category, Error, Store, parse_category, parse_ingredients, parse_name};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

const MENU: &str = "What would you like to do (add, show, plan, save, exit)?";

enum Flow {
    Continue,
    EndOfInput,
}

/// Line-oriented menu over the catalog, the planner and the shopping list.
///
/// Input ends like `exit`, minus the farewell.
pub struct Console<S: Store, R, W> {
    catalog: Catalog<S>,
    planner: Planner<S>,
    input: Lines<R>,
    output: W,
    export_dir: PathBuf,
}

impl<S, R, W> Console<S, R, W>
where
    S: Store,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(
        catalog: Catalog<S>,
        planner: Planner<S>,
        input: R,
        output: W,
        export_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog,
            planner,
            input: input.lines(),
            output,
            export_dir: export_dir.into(),
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }

    pub fn planner(&self) -> &Planner<S> {
        &self.planner
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.say(MENU)?;

            let Some(command) = self.read_line().await? else {
                return Ok(());
            };

            let outcome = match command.trim() {
                "add" => self.add().await,
                "show" => self.show().await,
                "plan" => self.plan().await,
                "print" => self.print(),
                "save" => self.save().await,
                "exit" => {
                    self.say("Bye!")?;
                    return Ok(());
                }
                _ => continue,
            };

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::EndOfInput) => return Ok(()),
                Err(err) => match err.downcast::<Error>() {
                    Ok(err) => {
                        tracing::warn!(command = command.trim(), error = %err, "Command failed");
                        self.say(&err.to_string())?;
                    }
                    Err(err) => return Err(err),
                },
            }
        }
    }

    async fn add(&mut self) -> Result<Flow> {
        self.say("Which meal do you want to add (breakfast, lunch, dinner)?")?;
        let Some(category) = self.prompt(parse_category).await? else {
            return Ok(Flow::EndOfInput);
        };

        self.say("Input the meal's name:")?;
        let Some(name) = self.prompt(parse_name).await? else {
            return Ok(Flow::EndOfInput);
        };

        self.say("Input the ingredients:")?;
        let Some(ingredients) = self.prompt(parse_ingredients).await? else {
            return Ok(Flow::EndOfInput);
        };

        self.catalog
            .add_meal(AddMealInput {
                category,
                name,
                ingredients,
            })
            .await?;

        self.say("The meal has been added!")?;

        Ok(Flow::Continue)
    }

    async fn show(&mut self) -> Result<Flow> {
        self.say("Which category do you want to print (breakfast, lunch, dinner)?")?;
        let Some(category) = self.prompt(parse_category).await? else {
            return Ok(Flow::EndOfInput);
        };

        let meals = self.catalog.list_by_category(category);
        if meals.is_empty() {
            writeln!(self.output, "No meals found.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Category: {category}")?;
        for meal in meals {
            writeln!(self.output)?;
            writeln!(self.output, "Name: {}", meal.name)?;
            writeln!(self.output, "Ingredients:")?;
            for ingredient in &meal.ingredients {
                writeln!(self.output, "{ingredient}")?;
            }
        }
        writeln!(self.output)?;

        Ok(Flow::Continue)
    }

    async fn plan(&mut self) -> Result<Flow> {
        self.planner.start().await?;

        while let Some((day, category)) = self.planner.current_slot() {
            if category == Category::Breakfast {
                self.say(&day.to_string())?;
            }

            let names = self
                .planner
                .choices(&self.catalog)?
                .into_iter()
                .map(|meal| meal.name.clone())
                .collect::<Vec<_>>();

            for name in &names {
                self.say(name)?;
            }
            self.say(&format!("Choose the {category} for {day} from the list above:"))?;

            loop {
                let Some(candidate) = self.read_line().await? else {
                    self.planner.abort();
                    return Ok(Flow::EndOfInput);
                };

                match self.planner.select(&self.catalog, &candidate).await? {
                    Selection::Retry => {
                        self.say("This meal doesn't exist. Choose a meal from the list above.")?;
                    }
                    Selection::Assigned(slot) | Selection::Completed(slot) => {
                        if slot.category == Category::Dinner {
                            self.say(&format!("Yeah! We planned the meals for {day}."))?;
                        }
                        break;
                    }
                }
            }
        }

        self.print()
    }

    fn print(&mut self) -> Result<Flow> {
        for line in self.planner.render_week(&self.catalog) {
            self.say(&line)?;
        }

        Ok(Flow::Continue)
    }

    async fn save(&mut self) -> Result<Flow> {
        if self.planner.plan().is_none() {
            return Err(Error::NoPlan.into());
        }

        self.say("Input a filename:")?;
        let Some(filename) = self.read_line().await? else {
            return Ok(Flow::EndOfInput);
        };

        let path = self.export_dir.join(filename.trim());
        let lines = mealplanner_shopping::save(&self.planner, &self.catalog, &path).await?;

        tracing::info!(path = %path.display(), lines, "Shopping list saved");

        self.say("Saved!")?;

        Ok(Flow::Continue)
    }

    /// Reads lines until `parse` accepts one, echoing each rejection.
    async fn prompt<T>(
        &mut self,
        parse: impl Fn(&str) -> mealplanner_shared::Result<T>,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.read_line().await? else {
                return Ok(None);
            };

            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.say(&err.to_string())?,
            }
        }
    }

    async fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;

        Ok(self.input.next_line().await?)
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;

        Ok(())
    }
}
