mod support;

use std::fs;

use divstrip::adapter::inbound::cli::upcoming::refresh_report;
use divstrip::adapter::outbound::dataset::DatasetSource;
use divstrip::adapter::outbound::report_file::{read_report_tickers, write_report};
use divstrip::application::{extract_tickers, format_report};
use divstrip::domain::{ExDateGroup, ExDateRow, Ticker};
use divstrip::error::Error;
use divstrip::infrastructure::config::settings::Config;
use divstrip::port::UpcomingExDateSource;
use divstrip::testkit::sources::StaticUpcomingSource;
use support::dataset::Workspace;

#[test]
fn formatted_report_keeps_ticker_order() {
    let groups = vec![
        ExDateGroup::new(
            "Wednesday, Jan 10",
            vec![
                ExDateRow::new("T", "AT&T", "$0.28", ["6.6%", "Quarterly", "Feb 1"]),
                ExDateRow::new("O", "Realty Income", "$0.26", ["5.4%", "Monthly", "Jan 15"]),
            ],
        ),
        ExDateGroup::new("Thursday, Jan 11", Vec::new()),
        ExDateGroup::new(
            "Friday, Jan 12",
            vec![ExDateRow::new("PG", "Procter & Gamble", "$0.94", ["2.5%", "Quarterly", "Feb 15"])],
        ),
    ];

    let text = format_report(&groups);

    assert!(text.starts_with("Date: Wednesday, Jan 10\nT, AT&T, $0.28, 6.6%, Quarterly, Feb 1\n"));
    assert_eq!(
        extract_tickers(&text),
        vec![Ticker::new("T"), Ticker::new("O"), Ticker::new("PG")]
    );
}

#[tokio::test]
async fn dataset_listings_round_trip_through_report_file() {
    let workspace = Workspace::new();
    let source = DatasetSource::open(workspace.data_dir()).unwrap();

    let groups = source.fetch_upcoming().await.unwrap();
    write_report(&workspace.report_path(), &groups).await.unwrap();
    let tickers = read_report_tickers(&workspace.report_path())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        tickers,
        vec![Ticker::new("KO"), Ticker::new("XOM"), Ticker::new("GE")]
    );
}

fn report_config(workspace: &Workspace) -> Config {
    let mut config = Config::default();
    config.report.path = workspace.report_path();
    config
}

#[tokio::test]
async fn refresh_writes_listings_from_source() {
    let workspace = Workspace::new();
    let config = report_config(&workspace);
    let source = StaticUpcomingSource::new(vec![ExDateGroup::new(
        "Friday, Jan 12",
        vec![
            ExDateRow::new("PG", "Procter & Gamble", "$0.94", ["2.5%", "Quarterly", "Feb 15"]),
            ExDateRow::new("T", "AT&T", "$0.28", ["6.6%", "Quarterly", "Feb 1"]),
        ],
    )]);

    let listings = refresh_report(&config, &source).await.unwrap();

    assert_eq!(listings, 2);
    let tickers = read_report_tickers(&workspace.report_path())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(tickers, vec![Ticker::new("PG"), Ticker::new("T")]);
}

#[tokio::test]
async fn unavailable_source_is_a_setup_error_and_keeps_old_report() {
    let workspace = Workspace::new();
    let config = report_config(&workspace);
    fs::write(workspace.report_path(), "Date: Monday\nKO, Coca-Cola\n").unwrap();

    let result = refresh_report(&config, &StaticUpcomingSource::unavailable()).await;

    assert!(matches!(result, Err(Error::Setup(_))));
    assert_eq!(
        fs::read_to_string(workspace.report_path()).unwrap(),
        "Date: Monday\nKO, Coca-Cola\n"
    );
}
