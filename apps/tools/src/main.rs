use anyhow::{anyhow, Result};
use catalog::{Catalog, CourseFilter};
use clap::{Parser, Subcommand};
use shared::{
    domain::{Course, CourseId},
    protocol::{routes, CourseQuery},
};

#[derive(Parser, Debug)]
struct Cli {
    /// Print JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List courses matching every given criterion.
    Browse {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// online, offline or all
        #[arg(long)]
        mode: Option<String>,
        #[arg(long)]
        institute: Option<String>,
    },
    /// Categories, institutes and modes a browse can select.
    Facets,
    Show {
        course_id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = Catalog::sample()?;

    match cli.command {
        Command::Browse {
            search,
            category,
            mode,
            institute,
        } => {
            let query = CourseQuery {
                search,
                category,
                mode,
                institute,
            };
            let filter = CourseFilter::from_query(&query).map_err(|e| anyhow!(e.message))?;
            let visible = catalog.filter(&filter);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                for course in &visible {
                    print_row(course);
                }
                let plural = if visible.len() == 1 { "" } else { "s" };
                println!("Showing {} course{plural}", visible.len());
            }
        }
        Command::Facets => {
            let facets = catalog.facets();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&facets)?);
            } else {
                println!("categories: {}", facets.categories.join(", "));
                println!("institutes: {}", facets.institutes.join(", "));
                let modes: Vec<&str> = facets.modes.iter().map(|m| m.as_str()).collect();
                println!("modes: {}", modes.join(", "));
            }
        }
        Command::Show { course_id } => {
            let id = CourseId(course_id);
            let course = catalog
                .get(&id)
                .ok_or_else(|| anyhow!("course {id} not found"))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(course)?);
            } else {
                print_row(course);
                println!("  {}", course.description);
                println!("  enroll: {}", routes::enroll_route(&course.id));
            }
        }
    }

    Ok(())
}

fn print_row(course: &Course) {
    let location = course.location.as_deref().unwrap_or("-");
    println!(
        "{:>3}  {:<28} {:<8} {:<15} {:<24} ${:<5} {:<8} {}",
        course.id.0,
        course.title,
        course.mode.as_str(),
        course.category,
        course.institute,
        course.price,
        course.duration,
        location
    );
}
