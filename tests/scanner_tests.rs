use std::sync::Arc;
use std::time::{Duration, Instant};

use rust_decimal_macros::dec;

use divstrip::application::{
    DividendEventParser, EvaluatorConfig, ParserConfig, RecoveryEvaluator, ScanConfig,
    TickerScanner, TickerStatus,
};
use divstrip::domain::{Outcome, SkipReason, Ticker};
use divstrip::testkit::domain::{bar, close_bar, date, row};
use divstrip::testkit::sources::{StaticDividendSource, StaticPriceSource};

fn scanner(dividends: StaticDividendSource, prices: Arc<StaticPriceSource>) -> TickerScanner {
    paced_scanner(dividends, prices, 0)
}

fn paced_scanner(
    dividends: StaticDividendSource,
    prices: Arc<StaticPriceSource>,
    request_delay_ms: u64,
) -> TickerScanner {
    TickerScanner::new(
        Arc::new(dividends),
        prices,
        DividendEventParser::new(ParserConfig {
            current_year: 2023,
            lookback_years: 5,
        }),
        RecoveryEvaluator::new(EvaluatorConfig::default()),
        &ScanConfig { request_delay_ms },
    )
}

fn tickers(symbols: &[&str]) -> Vec<Ticker> {
    symbols.iter().map(Ticker::new).collect()
}

#[tokio::test]
async fn recovered_event_is_a_success() {
    let dividends = StaticDividendSource::new().with_rows("ARII", vec![row("Mar 1, 2023", "$0.60")]);
    let prices = Arc::new(
        StaticPriceSource::new()
            .with_bar("ARII", date(2023, 2, 28), close_bar(dec!(50.00)))
            .with_bar(
                "ARII",
                date(2023, 3, 1),
                bar(dec!(49.00), dec!(51.00), dec!(48.80), dec!(49.50)),
            ),
    );

    let report = scanner(dividends, prices)
        .scan_ticker(&Ticker::new("ARII"))
        .await;

    assert_eq!(report.status, TickerStatus::Evaluated);
    assert_eq!(report.tally.successes, 1);
    assert_eq!(report.tally.failures, 0);
    assert_eq!(report.outcomes[0].outcome, Outcome::Success);
    assert_eq!(report.outcomes[0].event.amount(), dec!(0.60));
}

#[tokio::test]
async fn flat_open_never_fails() {
    // A dividend of zero and a huge prior close would fail on any bounded price.
    let dividends = StaticDividendSource::new().with_rows("ARII", vec![row("Mar 1, 2023", "$0.00")]);
    let prices = Arc::new(
        StaticPriceSource::new()
            .with_bar("ARII", date(2023, 2, 28), close_bar(dec!(5000.00)))
            .with_bar(
                "ARII",
                date(2023, 3, 1),
                bar(dec!(49.00), dec!(49.00), dec!(48.00), dec!(48.50)),
            ),
    );

    let report = scanner(dividends, prices)
        .scan_ticker(&Ticker::new("ARII"))
        .await;

    assert_eq!(report.tally.successes, 1);
    assert_eq!(report.tally.failures, 0);
}

#[tokio::test]
async fn january_first_uses_december_thirty_first() {
    let dividends = StaticDividendSource::new().with_rows("KO", vec![row("Jan 1, 2023", "$0.10")]);
    let prices = Arc::new(
        StaticPriceSource::new()
            .with_bar("KO", date(2022, 12, 31), close_bar(dec!(60.00)))
            .with_bar(
                "KO",
                date(2023, 1, 1),
                bar(dec!(59.00), dec!(59.50), dec!(58.90), dec!(59.10)),
            ),
    );

    let report = scanner(dividends, prices).scan_ticker(&Ticker::new("KO")).await;

    // 60.10 < 59.60 is false: scored, not skipped.
    assert_eq!(report.tally.failures, 1);
    assert_eq!(report.tally.skipped, 0);
}

#[tokio::test]
async fn price_failure_gives_all_skips_and_batch_continues() {
    let dividends = StaticDividendSource::new()
        .with_rows(
            "BAD",
            vec![row("Mar 1, 2023", "$0.50"), row("Dec 1, 2022", "$0.50")],
        )
        .with_rows("KO", vec![row("Mar 1, 2023", "$0.60")]);
    let prices = Arc::new(
        StaticPriceSource::new()
            .failing("BAD")
            .with_bar("KO", date(2023, 2, 28), close_bar(dec!(50.00)))
            .with_bar(
                "KO",
                date(2023, 3, 1),
                bar(dec!(49.00), dec!(51.00), dec!(48.80), dec!(49.50)),
            ),
    );

    let summary = scanner(dividends, Arc::clone(&prices))
        .scan_batch(&tickers(&["BAD", "KO"]))
        .await;

    let bad = &summary.reports[0];
    assert_eq!(bad.status, TickerStatus::Evaluated);
    assert_eq!(bad.tally.skipped, 2);
    assert_eq!(bad.tally.scored(), 0);
    assert!(bad
        .outcomes
        .iter()
        .all(|o| o.outcome == Outcome::Skipped(SkipReason::MissingPriceData)));

    assert_eq!(summary.reports[1].tally.successes, 1);
    assert_eq!(prices.requests(), 3);
}

#[tokio::test]
async fn history_failure_skips_ticker_only() {
    let dividends = StaticDividendSource::new()
        .failing("GE")
        .with_rows("KO", vec![row("Mar 1, 2023", "$0.60")]);
    let prices = Arc::new(StaticPriceSource::new());

    let summary = scanner(dividends, Arc::clone(&prices))
        .scan_batch(&tickers(&["GE", "KO", "NOPE"]))
        .await;

    assert_eq!(summary.reports.len(), 3);
    assert!(summary.reports[0].is_skipped());
    assert!(!summary.reports[1].is_skipped());
    assert!(summary.reports[2].is_skipped());
    assert_eq!(summary.skipped_tickers(), 2);

    // KO had no bars, so its one event is skipped.
    assert_eq!(summary.reports[1].tally.skipped, 1);
    assert_eq!(summary.skipped_events(), 1);
    assert_eq!(prices.requests(), 1);
}

#[tokio::test]
async fn lookback_halts_before_fetching_older_prices() {
    let dividends = StaticDividendSource::new().with_rows(
        "KO",
        vec![
            row("Mar 1, 2023", "$0.60"),
            row("Jun 5, 2017", "$0.37"),
            row("Jan 4, 2016", "$0.35"),
        ],
    );
    let prices = Arc::new(StaticPriceSource::new());

    let report = scanner(dividends, Arc::clone(&prices))
        .scan_ticker(&Ticker::new("KO"))
        .await;

    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.halted_at_year, Some(2017));
    assert_eq!(prices.requests(), 1);
}

#[tokio::test]
async fn malformed_rows_are_reported_and_skipped() {
    let dividends = StaticDividendSource::new().with_rows(
        "KO",
        vec![
            row("Xyz 1, 2023", "$0.60"),
            row("Mar 1, 2023", "n/a"),
            row("Feb 30, 2023", "$0.60"),
            row("Dec 1, 2022", "$0.44"),
        ],
    );
    let prices = Arc::new(StaticPriceSource::new());

    let report = scanner(dividends, prices).scan_ticker(&Ticker::new("KO")).await;

    let indexes: Vec<usize> = report.rejected_rows.iter().map(|r| r.index).collect();
    assert_eq!(indexes, vec![0, 1, 2]);
    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.outcomes[0].event.ex_date(), date(2022, 12, 1));
}

#[tokio::test]
async fn request_delay_spans_ticker_boundaries() {
    let dividends = StaticDividendSource::new()
        .with_rows("KO", vec![row("Mar 1, 2023", "$0.46")])
        .with_rows("XOM", vec![row("Mar 1, 2023", "$0.91")])
        .with_rows("GE", vec![row("Mar 1, 2023", "$0.08")]);
    let prices = Arc::new(StaticPriceSource::new());
    let scanner = paced_scanner(dividends, Arc::clone(&prices), 40);

    let started = Instant::now();
    let summary = scanner.scan_batch(&tickers(&["KO", "XOM", "GE"])).await;

    assert_eq!(summary.reports.len(), 3);
    assert_eq!(prices.requests(), 3);
    assert!(started.elapsed() >= Duration::from_millis(80));
}
