//! Narrative text tables
//!
//! The descriptive copy shown under the chart: one landing description per
//! family, and one event narrative per step. The event narratives are shared
//! by all three families; only the markers differ.

use crate::dataset::Family;
use crate::story::state::Step;

/// Landing description shown when a family is selected
pub fn base_description(family: Family) -> &'static str {
    match family {
        Family::Gas => {
            "Displayed here are average U.S. gasoline prices from January 2013 \
             through June 2023. Hover over each scatter point to obtain the price \
             for that specific month. Click on the \"Next Event\" button to view \
             when global events occurred and how average U.S. gasoline prices were \
             affected by that event. Click on the \"Crude Oil Prices\" button to \
             view data about crude oil or the \"Inflation\" button to view data \
             about U.S. inflation."
        }
        Family::Crude => {
            "Displayed here are average crude oil prices per barrel from January \
             2013 through June 2023. Hover over each scatter point to obtain the \
             price for that specific month. Click on the \"Next Event\" button to \
             view when global events occurred and how average crude oil prices were \
             affected by that event. Click on the \"Gas Prices\" button to view data \
             about U.S. gasoline or the \"Inflation\" button to view data about \
             U.S. inflation."
        }
        Family::Inflation => {
            "Displayed here are average U.S. inflation rates for each month from \
             January 2013 through June 2023. Hover over each scatter point to \
             obtain the percentage for that specific month. Click on the \"Next \
             Event\" button to view when global events occurred and see that there \
             is not much correlation until the Ukraine-Russian war. Click on the \
             \"Gas Prices\" button to view data about U.S. gasoline or the \"Crude \
             Oil Prices\" button to view data about crude oil."
        }
    }
}

/// Event narrative shown after the sequence advances to a step
pub fn event_narrative(step: Step) -> &'static str {
    match step {
        Step::One => {
            "Imports of crude oil and petroleum products fall to less than 260,000 \
             barrels per day, the lowest in almost two decades, according to the \
             U.S. Energy Information Administration. The reduced reliance on \
             foreign oil is the result of both declining demand and a domestic \
             energy revolution which, through the combination of hydraulic \
             fracturing and horizontal drilling, unlocked vast reserves of \"tight \
             oil\" in shale rock formations. Tight oil production surges from less \
             than one million barrels a day in 2010 to over four million barrels a \
             day by December 2015, exceeding the individual production of every \
             OPEC member except Saudi Arabia."
        }
        Step::Two => {
            "The Paris Agreement, signed by more than 190 countries including the \
             United States, enters into force. The most ambitious climate accord to \
             date, the agreement requires all parties to set targets to reduce \
             greenhouse gas emissions, with the goal of arresting the rise in the \
             average global temperature. Countries also agree to aim for net-zero \
             carbon emissions by mid-century. The United States pledges to cut its \
             emissions by more than 25 percent from 2005 levels by 2025, a move \
             that requires transitioning away from fossil fuels, including oil. \
             Although the accord does not include enforcement mechanisms, there are \
             periodic performance reviews meant to encourage countries to adopt \
             more ambitious targets."
        }
        Step::Three => {
            "The world is rocked by the emergence of a new coronavirus disease, \
             COVID-19, that quickly becomes a global pandemic. Response measures, \
             including stay-at-home orders, trigger a sharp drop in the demand for \
             oil. Falling oil prices create a rift within OPEC and lead to a price \
             war between Saudi Arabia and Russia, with Riyadh ramping up production \
             to further slash prices in an effort to force Moscow to the table. Oil \
             prices hit rock bottom; in April, a major benchmark price for U.S. \
             crude oil briefly falls below zero for the first time in history. \
             After Whiting Petroleum Corporation, a major U.S. producer, declares \
             bankruptcy, President Trump attempts to broker an OPEC deal to prevent \
             further damage to the U.S. industry. After Trump intervenes, OPEC and \
             Russia agree to curb production and raise prices."
        }
        Step::Four => {
            "Russia's invasion of Ukraine causes turmoil in global oil markets. \
             Biden blocks U.S. imports of oil from Russia, and Western sanctions \
             cause energy companies to withdraw from the country. Oil prices, \
             already rising in the wake of the pandemic, surge to their highest \
             level since 2008. In response to near-record gasoline prices, U.S. \
             lawmakers on both sides of the aisle call for boosting domestic oil \
             production, though some in Congress urge a quicker transition to \
             renewable energy. The United States and other members of the \
             International Energy Agency announce plans to collectively release \
             sixty million barrels of oil from strategic reserves. Meanwhile, the \
             Biden administration considers smoothing rocky relations with Iran, \
             Saudi Arabia, and Venezuela in the hope that those countries will \
             supply more oil. Senior U.S. officials travel to Caracas for the first \
             time since 2019, and the Biden administration pushes to finalize \
             negotiations on reviving the 2015 Iran nuclear agreement and lifting \
             U.S. sanctions on Tehran."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_has_a_base_description() {
        for family in Family::all() {
            let text = base_description(*family);
            assert!(text.contains("January 2013"));
            assert!(text.contains("Next Event"));
        }
    }

    #[test]
    fn test_narratives_are_distinct_per_step() {
        assert!(event_narrative(Step::One).contains("260,000"));
        assert!(event_narrative(Step::Two).contains("Paris Agreement"));
        assert!(event_narrative(Step::Three).contains("COVID-19"));
        assert!(event_narrative(Step::Four).contains("invasion of Ukraine"));
    }
}
