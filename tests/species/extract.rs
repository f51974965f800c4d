use crate::common::{
    self, Row, SPECIES_PATH, breeding_page, html_page, mock_html, mock_status, species,
    species_list_page, wiki_page,
};
use paldex::species::extract_species;
use paldex::{Child, PalError, Suitability};

#[tokio::test]
async fn new_species_are_scraped_and_sorted_by_id() {
    let server = common::setup_server();
    let list = mock_html(
        &server,
        SPECIES_PATH,
        species_list_page(&[
            Row {
                id: "002B",
                name: "Cattiva Noct",
                detail: "/archives/cattiva-noct",
                ratings: &["Handiwork Lv 1"],
            },
            Row {
                id: "002",
                name: "Cattiva",
                detail: "/archives/cattiva",
                ratings: &["Handiwork Lv 1", "Mining", "Transporting Lv 2"],
            },
            Row {
                id: "001",
                name: "Lamball",
                detail: "/archives/lamball",
                ratings: &["Handiwork Lv 1", "Farming Lv x"],
            },
        ]),
    );
    let lamball_detail = mock_html(
        &server,
        "/archives/lamball",
        breeding_page("Lamball", &[("Cattiva", "Lamball"), ("", "Lamball")]),
    );
    let _cattiva_detail = mock_html(&server, "/archives/cattiva", breeding_page("Cattiva", &[]));
    let _noct_detail = mock_html(&server, "/archives/cattiva-noct", html_page("<p>stub</p>"));
    let _lamball_wiki = mock_html(&server, "/wiki/Lamball", wiki_page("Lamball", "/images/Lamball.png"));

    let client = common::client_for(&server);
    let out = extract_species(&client, Vec::new()).await.unwrap();
    list.assert();
    lamball_detail.assert();

    let ids: Vec<&str> = out.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["001", "002", "002B"]);

    let lamball = &out[0];
    assert_eq!(lamball.name, "Lamball");
    assert_eq!(lamball.image_url, format!("{}/images/Lamball.png", server.base_url()));
    // "Farming Lv x" has no numeric level and is dropped.
    assert_eq!(
        lamball.suitability,
        vec![Suitability {
            work: "Handiwork".into(),
            level: 1
        }]
    );
    assert_eq!(
        lamball.children,
        vec![Child {
            parent: "Cattiva".into(),
            child: "Lamball".into()
        }]
    );

    let cattiva = &out[1];
    assert_eq!(
        cattiva.suitability.iter().map(|s| s.work.as_str()).collect::<Vec<_>>(),
        ["Handiwork", "Transporting"]
    );
    assert_eq!(cattiva.suitability[1].level, 2);
    assert!(cattiva.image_url.is_empty(), "no wiki page was mocked");

    // Detail page without a breeding section leaves children empty.
    assert!(out[2].children.is_empty());
}

#[tokio::test]
async fn known_species_only_backfill_missing_images() {
    let server = common::setup_server();
    let _list = mock_html(
        &server,
        SPECIES_PATH,
        species_list_page(&[
            Row {
                id: "001",
                name: "Lamball",
                detail: "/archives/lamball",
                ratings: &["Handiwork Lv 3"],
            },
            Row {
                id: "005",
                name: "Foxparks",
                detail: "/archives/foxparks",
                ratings: &["Kindling Lv 1"],
            },
        ]),
    );
    let lamball_detail = mock_html(&server, "/archives/lamball", breeding_page("Lamball", &[("A", "B")]));
    let foxparks_detail = mock_html(&server, "/archives/foxparks", breeding_page("Foxparks", &[("A", "B")]));
    let lamball_wiki = mock_html(&server, "/wiki/Lamball", wiki_page("Lamball", "/images/new.png"));
    let foxparks_wiki = mock_html(&server, "/wiki/Foxparks", wiki_page("Foxparks", "/images/Foxparks.png"));

    let mut known_lamball = species("001", "lamball", "https://img.invalid/kept.png");
    known_lamball.children.push(Child {
        parent: "Old".into(),
        child: "Entry".into(),
    });
    let existing = vec![species("005", "Foxparks", ""), known_lamball.clone()];

    let client = common::client_for(&server);
    let out = extract_species(&client, existing).await.unwrap();

    // Names match case-insensitively, so nothing is duplicated or re-scraped.
    assert_eq!(out.len(), 2);
    lamball_detail.assert_hits(0);
    foxparks_detail.assert_hits(0);
    lamball_wiki.assert_hits(0);
    foxparks_wiki.assert();

    assert_eq!(out[0], known_lamball);
    assert_eq!(out[1].name, "Foxparks");
    assert_eq!(out[1].image_url, format!("{}/images/Foxparks.png", server.base_url()));
    assert!(out[1].suitability.is_empty(), "only the image is backfilled");
}

#[tokio::test]
async fn rows_without_id_or_name_are_skipped() {
    let server = common::setup_server();
    let page = html_page(
        r#"<table class="a-table flexible-cell"><tbody>
<tr><th></th><td><a href="/archives/ghost">Ghost</a></td><td></td><td></td></tr>
<tr><th>010</th><td>No link here</td><td></td><td></td></tr>
<tr><th>011</th><td><a href="/archives/penking">Penking</a></td><td>Water</td><td></td></tr>
</tbody></table>"#,
    );
    let _list = mock_html(&server, SPECIES_PATH, page);
    let _detail = mock_html(&server, "/archives/penking", breeding_page("Penking", &[]));

    let client = common::client_for(&server);
    let out = extract_species(&client, Vec::new()).await.unwrap();

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "011");
    assert_eq!(out[0].name, "Penking");
}

#[tokio::test]
async fn missing_species_table_is_a_parse_error() {
    let server = common::setup_server();
    let _list = mock_html(&server, SPECIES_PATH, html_page("<table class=\"other\"></table>"));

    let client = common::client_for(&server);
    let err = extract_species(&client, Vec::new()).await.unwrap_err();
    assert!(matches!(err, PalError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn list_page_status_is_reported() {
    let server = common::setup_server();
    let list = mock_status(&server, SPECIES_PATH, 503);

    let client = common::client_for(&server);
    let err = extract_species(&client, Vec::new()).await.unwrap_err();
    list.assert();

    match err {
        PalError::Status { status, url } => {
            assert_eq!(status, 503);
            assert!(url.ends_with(SPECIES_PATH));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_detail_page_leaves_children_empty() {
    let server = common::setup_server();
    let _list = mock_html(
        &server,
        SPECIES_PATH,
        species_list_page(&[Row {
            id: "003",
            name: "Chikipi",
            detail: "/archives/chikipi",
            ratings: &["Farming Lv 1"],
        }]),
    );
    let detail = mock_status(&server, "/archives/chikipi", 500);

    let client = common::client_for(&server);
    let out = extract_species(&client, Vec::new()).await.unwrap();
    detail.assert();

    assert_eq!(out.len(), 1);
    assert!(out[0].children.is_empty());
    assert_eq!(out[0].suitability.len(), 1);
}

#[tokio::test]
async fn breeding_heading_without_table_leaves_children_empty() {
    let server = common::setup_server();
    let _list = mock_html(
        &server,
        SPECIES_PATH,
        species_list_page(&[Row {
            id: "004",
            name: "Teafant",
            detail: "/archives/teafant",
            ratings: &[],
        }]),
    );
    let _detail = mock_html(
        &server,
        "/archives/teafant",
        html_page(r#"<h3 class="a-header--3">Best Ways to Breed Teafant</h3><p>Coming soon.</p>"#),
    );

    let client = common::client_for(&server);
    let out = extract_species(&client, Vec::new()).await.unwrap();
    assert!(out[0].children.is_empty());
}
