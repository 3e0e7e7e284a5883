//! Plain-text rendering of advocate cards.

use advocates_client::{AdvocateGridView, CardView, EMPTY_MESSAGE};
use std::fmt;

/// One card. Matching specialties are wrapped in `*`.
struct Card<'a, 'b>(&'a CardView<'b>);

impl fmt::Display for Card<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.0;
        let advocate = card.advocate;

        writeln!(
            f,
            "#{} {} ({}), {} years experience",
            advocate.id,
            advocate.full_name(),
            advocate.degree,
            advocate.years_of_experience
        )?;
        writeln!(f, "    {} | {}", advocate.city, advocate.phone_number)?;

        let specialties: Vec<String> = card
            .specialties
            .iter()
            .map(|(s, matched)| if *matched { format!("*{}*", s) } else { s.to_string() })
            .collect();
        writeln!(f, "    Specialties: {}", specialties.join(", "))?;

        if card.can_toggle {
            let label = if card.show_all {
                "show relevant"
            } else {
                "show all specialties"
            };
            writeln!(f, "    (:all {} to {})", advocate.id, label)?;
        }
        Ok(())
    }
}

/// Status line describing the feed, followed by the last error if any.
struct Status<'a>(&'a AdvocateGridView);

impl fmt::Display for Status<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        write!(
            f,
            "-- {} shown of {} fetched",
            view.displayed().len(),
            view.fetched().len()
        )?;

        let term = view.committed_term();
        if !term.is_empty() {
            write!(f, " for \"{}\"", term)?;
        }
        if !view.filters().is_empty() {
            f.write_str(", filtered")?;
        }
        if view.has_more() {
            f.write_str(", :more for next page")?;
        }
        f.write_str(" --\n")?;

        if let Some(error) = view.last_error() {
            writeln!(f, "!! {}", error)?;
        }
        Ok(())
    }
}

pub fn card(card: &CardView<'_>) -> String {
    Card(card).to_string()
}

pub fn cards(cards: &[CardView<'_>]) -> String {
    if cards.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }
    cards.iter().map(card).collect::<Vec<_>>().join("\n")
}

/// Cards plus the status line.
pub fn view(view: &AdvocateGridView) -> String {
    format!("{}\n{}", cards(&view.cards()), Status(view))
}
