//! Interactive browsing: free text searches after a pause, `:` lines are
//! commands.

use advocates_client::{AdvocateGridView, AdvocateSource, Completion, PageRequest, YearsBucket};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, sleep_until};
use tracing::debug;

use crate::render;

pub const HELP: &str = "\
Type to search (applied after a short pause). Commands:
  :more            load the next page
  :reset           clear the search and start over
  :city [NAME]     filter by city, no name clears it
  :degree [NAME]   filter by degree, no name clears it
  :years [BUCKET]  filter by experience (1-5, 6-10, 10+)
  :clear           clear all filters
  :options         list the filter values present in the results
  :all ID          toggle all specialties on a card
  :help            show this help
  :quit            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Type(String),
    More,
    Reset,
    City(Option<String>),
    Degree(Option<String>),
    Years(Option<YearsBucket>),
    ClearFilters,
    Options,
    ToggleAll(i32),
    Help,
    Quit,
}

impl Action {
    pub fn parse(line: &str) -> Result<Self, String> {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Ok(Action::Type(line.to_string()));
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        let arg = (!arg.is_empty()).then(|| arg.to_string());

        match name {
            "more" => Ok(Action::More),
            "reset" => Ok(Action::Reset),
            "city" => Ok(Action::City(arg)),
            "degree" => Ok(Action::Degree(arg)),
            "years" => arg
                .map(|b| b.parse::<YearsBucket>())
                .transpose()
                .map(Action::Years)
                .map_err(|_| "years must be one of 1-5, 6-10, 10+".to_string()),
            "clear" => Ok(Action::ClearFilters),
            "options" => Ok(Action::Options),
            "all" => arg
                .and_then(|id| id.parse().ok())
                .map(Action::ToggleAll)
                .ok_or_else(|| "usage: :all ID".to_string()),
            "help" => Ok(Action::Help),
            "quit" | "q" => Ok(Action::Quit),
            other => Err(format!("unknown command :{}", other)),
        }
    }
}

/// Apply an action to the view. Returns a request when one must be fetched.
pub fn apply(view: &mut AdvocateGridView, action: Action) -> Option<PageRequest> {
    match action {
        Action::Type(text) => {
            view.type_text(text);
            None
        }
        Action::More => view.load_more(),
        Action::Reset => Some(view.reset()),
        Action::City(city) => {
            view.set_city(city);
            None
        }
        Action::Degree(degree) => {
            view.set_degree(degree);
            None
        }
        Action::Years(years) => {
            view.set_years(years);
            None
        }
        Action::ClearFilters => {
            view.clear_filters();
            None
        }
        Action::ToggleAll(id) => {
            view.toggle_show_all(id);
            None
        }
        Action::Options | Action::Help | Action::Quit => None,
    }
}

fn options(view: &AdvocateGridView) -> String {
    let options = view.filter_options();
    let years: Vec<&str> = options.years.iter().map(|b| b.as_ref()).collect();
    format!(
        "cities: {}\ndegrees: {}\nyears: {}\n",
        options.cities.join(", "),
        options.degrees.join(", "),
        years.join(", ")
    )
}

async fn fetch<S: AdvocateSource + ?Sized>(
    view: &mut AdvocateGridView,
    source: &S,
    request: PageRequest,
) {
    let completion = view.fetch(source, request).await;
    debug!(?completion, "Page fetched");
    if completion != Completion::Stale {
        print!("{}", render::view(view));
    }
}

pub async fn run<S: AdvocateSource + ?Sized>(source: &S, page_size: u64) -> eyre::Result<()> {
    let mut view = AdvocateGridView::new(page_size);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n", HELP);
    let request = view.start();
    fetch(&mut view, source, request).await;

    loop {
        let deadline = view.debounce_deadline();

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Action::parse(&line) {
                    Ok(Action::Quit) => break,
                    Ok(Action::Help) => println!("{}", HELP),
                    Ok(Action::Options) => print!("{}", options(&view)),
                    Ok(action) => {
                        let redraw = !matches!(action, Action::Type(_) | Action::More | Action::Reset);
                        if let Some(request) = apply(&mut view, action) {
                            fetch(&mut view, source, request).await;
                        } else if redraw {
                            print!("{}", render::view(&view));
                        }
                    }
                    Err(message) => eprintln!("{}", message),
                }
            }
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                if let Some(request) = view.poll_debounce(Instant::now()) {
                    fetch(&mut view, source, request).await;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_free_text_is_typed() {
        assert_eq!(
            Action::parse("anxiety"),
            Ok(Action::Type("anxiety".to_string()))
        );
        assert_eq!(Action::parse(""), Ok(Action::Type(String::new())));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Action::parse(":more"), Ok(Action::More));
        assert_eq!(Action::parse("  :reset "), Ok(Action::Reset));
        assert_eq!(
            Action::parse(":city San Antonio"),
            Ok(Action::City(Some("San Antonio".to_string())))
        );
        assert_eq!(Action::parse(":city"), Ok(Action::City(None)));
        assert_eq!(
            Action::parse(":years 10+"),
            Ok(Action::Years(Some(YearsBucket::OverTen)))
        );
        assert_eq!(Action::parse(":years"), Ok(Action::Years(None)));
        assert_eq!(Action::parse(":all 7"), Ok(Action::ToggleAll(7)));
        assert_eq!(Action::parse(":q"), Ok(Action::Quit));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Action::parse(":years 3").is_err());
        assert!(Action::parse(":all").is_err());
        assert!(Action::parse(":all seven").is_err());
        assert!(Action::parse(":frobnicate").is_err());
    }

    #[test]
    fn test_reset_returns_first_page_and_keeps_filters() {
        let mut view = AdvocateGridView::new(5);
        view.start();
        apply(&mut view, Action::City(Some("Austin".to_string())));
        apply(&mut view, Action::Type("md".to_string()));

        let request = apply(&mut view, Action::Reset).unwrap();

        assert_eq!(request.page, 1);
        assert_eq!(request.term, "");
        assert_eq!(view.input(), "");
        assert_eq!(view.filters().city.as_deref(), Some("Austin"));
    }

    #[test]
    fn test_more_is_refused_while_loading() {
        let mut view = AdvocateGridView::new(5);
        view.start();

        assert_eq!(apply(&mut view, Action::More), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typed_text_waits_for_debounce() {
        let mut view = AdvocateGridView::new(5);
        let first = view.start();
        view.complete(&first, Ok(Vec::new()));

        assert_eq!(apply(&mut view, Action::Type("trauma".to_string())), None);
        assert!(view.poll_debounce(Instant::now()).is_none());

        tokio::time::advance(advocates_client::SEARCH_DEBOUNCE).await;
        let request = view.poll_debounce(Instant::now()).unwrap();
        assert_eq!(request.term, "trauma");
        assert_eq!(request.page, 1);
    }
}
