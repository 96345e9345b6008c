//! Race-page markup builders producing the structures the extractor reads.

/// A page that states the no-races marker instead of race sections.
pub fn no_races_page() -> String {
    "<html><body><div class=\"racing_center\">\
     <p>No races found for this date</p>\
     </div></body></html>"
        .to_string()
}

/// Builds a full race-day page out of race sections.
#[derive(Debug, Default)]
pub struct RacePage {
    sections: Vec<String>,
}

impl RacePage {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    pub fn add_section(mut self, section: RaceSection) -> Self {
        self.sections.push(section.build());
        self
    }

    /// Adds arbitrary markup alongside the built sections.
    pub fn add_raw(mut self, html: &str) -> Self {
        self.sections.push(html.to_string());
        self
    }

    pub fn build(self) -> String {
        format!(
            "<html><head><title>Racing Center</title></head><body>\
             <div class=\"racing_center\">{}</div>\
             </body></html>",
            self.sections.join("")
        )
    }
}

/// One `race-N` section with a heading block, optional prize and record
/// lines, and a runner table.
#[derive(Debug)]
pub struct RaceSection {
    index: usize,
    number: String,
    title: String,
    race_class: String,
    timing: Vec<String>,
    prize_text: Option<String>,
    record_text: Option<String>,
    rows: Vec<String>,
    with_heading: bool,
}

impl RaceSection {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            number: index.to_string(),
            title: "THE TEST PLATE".to_string(),
            race_class: "Class IV".to_string(),
            timing: vec!["1200M".to_string(), "14:30".to_string()],
            prize_text: None,
            record_text: None,
            rows: Vec::new(),
            with_heading: true,
        }
    }

    /// Drops the heading block entirely, leaving a malformed section.
    pub fn without_heading(mut self) -> Self {
        self.with_heading = false;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_class(mut self, race_class: &str) -> Self {
        self.race_class = race_class.to_string();
        self
    }

    pub fn with_distance(mut self, distance: &str) -> Self {
        self.timing[0] = distance.to_string();
        self
    }

    pub fn with_time(mut self, time: &str) -> Self {
        self.timing[1] = time.to_string();
        self
    }

    /// Replaces the timing entries wholesale, for under-filled headings.
    pub fn with_time_entries(mut self, entries: &[&str]) -> Self {
        self.timing = entries.iter().map(|entry| entry.to_string()).collect();
        self
    }

    pub fn with_prizes(
        self,
        winner: &str,
        second: &str,
        third: &str,
        fourth: &str,
        total: &str,
    ) -> Self {
        let text = format!(
            "Winner:₹.{} Second:₹.{} Third:₹.{} Fourth:₹.{} Total:₹.{}",
            winner, second, third, fourth, total
        );
        self.with_prize_text(&text)
    }

    pub fn with_prize_text(mut self, text: &str) -> Self {
        self.prize_text = Some(text.to_string());
        self
    }

    pub fn with_record(mut self, date: &str, details: &str) -> Self {
        self.record_text = Some(format!("Record Time : {} {}", date, details));
        self
    }

    pub fn add_horse(mut self, horse: HorseRow) -> Self {
        self.rows.push(horse.build());
        self
    }

    /// Adds a raw `<tr>` to the runner table.
    pub fn add_raw_row(mut self, row: &str) -> Self {
        self.rows.push(row.to_string());
        self
    }

    pub fn build(self) -> String {
        let heading = if self.with_heading {
            let timing: String = self
                .timing
                .iter()
                .map(|entry| format!("<h4>{}</h4>", entry))
                .collect();
            format!(
                "<div class=\"heading_div\">\
                 <div class=\"side_num\"><h1>{}</h1></div>\
                 <div class=\"center_heading\"><h2>{}</h2><h3>{}</h3></div>\
                 <div class=\"archive_time\">{}</div>\
                 </div>",
                self.number, self.title, self.race_class, timing
            )
        } else {
            String::new()
        };

        let prizes = self
            .prize_text
            .map(|text| {
                format!(
                    "<div class=\"winner_amount\"><p class=\"winner_content\">{}</p></div>",
                    text
                )
            })
            .unwrap_or_default();
        let record = self
            .record_text
            .map(|text| format!("<div class=\"record_time\">{}</div>", text))
            .unwrap_or_default();

        format!(
            "<div id=\"race-{}\" class=\"race_data\">{}{}{}\
             <table class=\"race_card_tab\"><tbody>{}</tbody></table>\
             </div>",
            self.index,
            heading,
            prizes,
            record,
            self.rows.join("")
        )
    }
}

/// One twelve-cell runner row.
#[derive(Debug)]
pub struct HorseRow {
    number: String,
    draw: Option<String>,
    silk: Option<String>,
    name: String,
    link: Option<String>,
    ex_name: Option<String>,
    pedigree: String,
    last_five: Option<String>,
    description: String,
    owner: String,
    trainer: Option<(String, String)>,
    jockey: Option<(String, String)>,
    weight: String,
    equipment: (String, String, String),
    rating_html: String,
}

impl HorseRow {
    /// A row with every cell populated the way live pages are.
    pub fn new(number: &str, name: &str) -> Self {
        Self {
            number: number.to_string(),
            draw: Some("2".to_string()),
            silk: Some(format!("/images/silks/{}.png", number)),
            name: name.to_string(),
            link: Some(format!("/horse/{}", number)),
            ex_name: None,
            pedigree: "Bay colt by Sire out of Dam".to_string(),
            last_five: None,
            description: "Racing fit".to_string(),
            owner: "Mr Owner".to_string(),
            trainer: Some(("T Trainer".to_string(), "/trainer/1".to_string())),
            jockey: Some(("J Jockey".to_string(), "/jockey/1".to_string())),
            weight: "57".to_string(),
            equipment: ("--".to_string(), "S".to_string(), "--".to_string()),
            rating_html: "60".to_string(),
        }
    }

    /// A row with every optional fragment left out.
    pub fn bare(number: &str, name: &str) -> Self {
        let mut row = Self::new(number, name);
        row.draw = None;
        row.silk = None;
        row.link = None;
        row.rating_html = "55".to_string();
        row
    }

    pub fn with_draw(mut self, draw: &str) -> Self {
        self.draw = Some(draw.to_string());
        self
    }

    pub fn with_silk(mut self, src: &str) -> Self {
        self.silk = Some(src.to_string());
        self
    }

    pub fn with_link(mut self, href: &str) -> Self {
        self.link = Some(href.to_string());
        self
    }

    pub fn with_ex_name(mut self, ex_name: &str) -> Self {
        self.ex_name = Some(ex_name.to_string());
        self
    }

    pub fn with_pedigree(mut self, pedigree: &str) -> Self {
        self.pedigree = pedigree.to_string();
        self
    }

    pub fn with_last_five(mut self, runs: &str) -> Self {
        self.last_five = Some(runs.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_owner(mut self, owner: &str) -> Self {
        self.owner = owner.to_string();
        self
    }

    pub fn with_trainer(mut self, name: &str, href: &str) -> Self {
        self.trainer = Some((name.to_string(), href.to_string()));
        self
    }

    pub fn with_jockey(mut self, name: &str, href: &str) -> Self {
        self.jockey = Some((name.to_string(), href.to_string()));
        self
    }

    pub fn with_weight(mut self, weight: &str) -> Self {
        self.weight = weight.to_string();
        self
    }

    pub fn with_equipment(mut self, al: &str, sh: &str, eq: &str) -> Self {
        self.equipment = (al.to_string(), sh.to_string(), eq.to_string());
        self
    }

    /// Raw inner markup of the rating cell.
    pub fn with_rating_html(mut self, html: &str) -> Self {
        self.rating_html = html.to_string();
        self
    }

    pub fn build(self) -> String {
        let draw = self
            .draw
            .map(|draw| format!(" <span>{}</span>", draw))
            .unwrap_or_default();
        let silk = self
            .silk
            .map(|src| {
                format!(
                    "<div class=\"card_tb_image\"><img src=\"{}\"></div>",
                    src
                )
            })
            .unwrap_or_default();
        let name_anchor = match self.link {
            Some(href) => format!("<a href=\"{}\">{}</a>", href, self.name),
            None => format!("<a>{}</a>", self.name),
        };
        let ex_name = self
            .ex_name
            .map(|ex| format!("<span style=\"color:red;font-size:11px;\">{}</span>", ex))
            .unwrap_or_default();
        let last_five = self
            .last_five
            .map(|runs| format!("<span class=\"last-five-runs-lable\">{}</span>", runs))
            .unwrap_or_default();
        let trainer = self
            .trainer
            .map(|(name, href)| format!("<a href=\"{}\">{}</a>", href, name))
            .unwrap_or_default();
        let jockey = self
            .jockey
            .map(|(name, href)| format!("<a href=\"{}\">{}</a>", href, name))
            .unwrap_or_default();

        format!(
            "<tr>\
             <td>{}{}</td>\
             <td>{}</td>\
             <td><h5>{}</h5>{}<h6 class=\"margin_remove\">{}</h6>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             </tr>",
            self.number,
            draw,
            silk,
            name_anchor,
            ex_name,
            self.pedigree,
            last_five,
            self.description,
            self.owner,
            trainer,
            jockey,
            self.weight,
            self.equipment.0,
            self.equipment.1,
            self.equipment.2,
            self.rating_html,
        )
    }
}
