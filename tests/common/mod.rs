#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use paldex::{CatalogStore, Pacing, PalClient, PassiveSkill, Species};
use tempfile::TempDir;
use url::Url;

pub const SPECIES_PATH: &str = "/archives/species";
pub const SKILLS_PATH: &str = "/archives/skills";
pub const COMBOS_PATH: &str = "/archives/combos";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// Client pointed at the mock server for every source, with pacing disabled.
pub fn client_for(server: &MockServer) -> PalClient {
    PalClient::builder()
        .species_url(Url::parse(&format!("{}{SPECIES_PATH}", server.base_url())).unwrap())
        .skills_url(Url::parse(&format!("{}{SKILLS_PATH}", server.base_url())).unwrap())
        .combos_url(Url::parse(&format!("{}{COMBOS_PATH}", server.base_url())).unwrap())
        .wiki_base(Url::parse(&format!("{}/wiki/", server.base_url())).unwrap())
        .pacing(Pacing::Disabled)
        .build()
        .unwrap()
}

/// A store in a fresh temp dir. Keep the `TempDir` alive for the test's duration.
pub fn temp_store() -> (TempDir, CatalogStore) {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::new(dir.path().join("data"));
    (dir, store)
}

pub fn html_page(body: &str) -> String {
    format!("<!doctype html>\n<html><head><title>t</title></head><body>\n{body}\n</body></html>")
}

pub fn mock_html<'a>(server: &'a MockServer, path: &str, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(body);
    })
}

pub fn mock_status<'a>(server: &'a MockServer, path: &str, status: u16) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(status).body("nope");
    })
}

/* ----------------------- species pages ----------------------- */

pub struct Row<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub detail: &'a str,
    pub ratings: &'a [&'a str],
}

/// Game8-style species table: `th` id, linked name, element, suitability `.align` divs.
pub fn species_list_page(rows: &[Row<'_>]) -> String {
    let mut body = String::from(
        r#"<table class="a-table flexible-cell"><tbody>
<tr><th>No.</th><th>Pal</th><th>Element</th><th>Work Suitability</th></tr>
"#,
    );
    for r in rows {
        let ratings: String = r
            .ratings
            .iter()
            .map(|t| format!(r#"<div class="align">{t}</div>"#))
            .collect();
        body.push_str(&format!(
            "<tr><th>{}</th><td><a href=\"{}\">{}</a></td><td>Neutral</td><td>{}</td></tr>\n",
            r.id, r.detail, r.name, ratings
        ));
    }
    body.push_str("</tbody></table>");
    html_page(&body)
}

/// Detail page with a breeding section: columns 3 and 5 hold parent and child.
pub fn breeding_page(name: &str, pairs: &[(&str, &str)]) -> String {
    let mut rows = String::from("<tr><th>Parent 1</th><th></th><th>Parent 2</th><th></th><th>Child</th></tr>\n");
    for (parent, child) in pairs {
        rows.push_str(&format!(
            "<tr><td><img src=\"/i.png\"></td><td>{name}</td><td> {parent} </td><td>=</td><td>{child}</td></tr>\n"
        ));
    }
    html_page(&format!(
        r#"<h3 class="a-header--3">{name} Drops</h3>
<p>Some text.</p>
<h3 class="a-header--3">Best Ways to Breed {name}</h3>
<p>Combinations below.</p>
<div class="note">tip</div>
<table class="a-table"><tbody>
{rows}</tbody></table>"#
    ))
}

/// Wiki article whose infobox holds `src`.
pub fn wiki_page(name: &str, src: &str) -> String {
    html_page(&format!(
        r#"<div class="mw-parser-output">
<aside class="portable-infobox"><figure><img src="{src}" alt="{name}"></figure></aside>
<p>{name} is a pal.</p></div>"#
    ))
}

/* ----------------------- skill / combo pages ----------------------- */

/// `(name, effect, alt effect, tier text)` rows under heading `#hm_1`.
pub fn skills_page(rows: &[(&str, &str, &str, &str)]) -> String {
    let mut body = String::from(
        r#"<h3 class="a-header--3" id="hm_0">Intro</h3>
<table><tbody><tr><td>Decoy</td><td>x</td><td></td><td>Tier 9</td></tr></tbody></table>
<h3 class="a-header--3" id="hm_1">All Passive Skills</h3>
<p>List of skills.</p>
<table class="a-table"><tbody>
<tr><th>Name</th><th>Effect</th><th>Notes</th><th>Tier</th></tr>
"#,
    );
    for (name, effect, alt, tier) in rows {
        body.push_str(&format!(
            "<tr><td>{name}</td><td>{effect}</td><td>{alt}</td><td>{tier}</td></tr>\n"
        ));
    }
    body.push_str("</tbody></table>");
    html_page(&body)
}

/// A combo section: heading `#anchor` followed by a table of `rows`.
pub fn combo_section(anchor: &str, title: &str, rows: &[&[&str]]) -> String {
    let mut out = format!(
        "<h3 class=\"a-header--3\" id=\"{anchor}\">{title}</h3>\n<table><tbody>\n<tr><th>Skill</th><th>Skill</th></tr>\n"
    );
    for row in rows {
        out.push_str("<tr>");
        for cell in *row {
            out.push_str(&format!("<td>{cell}</td>"));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody></table>\n");
    out
}

/* ----------------------- catalog seeds ----------------------- */

pub fn species(id: &str, name: &str, image_url: &str) -> Species {
    Species {
        id: id.to_string(),
        name: name.to_string(),
        image_url: image_url.to_string(),
        suitability: Vec::new(),
        children: Vec::new(),
    }
}

pub fn skill(name: &str, tier: u32) -> PassiveSkill {
    PassiveSkill {
        name: name.to_string(),
        effect: format!("{name} effect"),
        tier,
    }
}

/// Store seeded with Lamball / Cattiva / Foxparks and a handful of skills.
pub fn seeded_store() -> (TempDir, CatalogStore) {
    let (dir, store) = temp_store();
    store
        .save_species(&[
            species("001", "Lamball", "https://img.invalid/lamball.png"),
            species("002", "Cattiva", "https://img.invalid/cattiva.png"),
            species("005", "Foxparks", ""),
        ])
        .unwrap();
    store
        .save_skills(&[
            skill("Runner", 2),
            skill("Swift", 3),
            skill("Artisan", 3),
            skill("Lucky", 4),
        ])
        .unwrap();
    (dir, store)
}
