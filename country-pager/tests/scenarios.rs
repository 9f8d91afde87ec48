//! Concrete pagination scenarios for a country list paged 18 at a time.

use anyhow::Result;
use country_pager::{
    DataSlicer, PageNumber, PageToken, PaginationConfig, PaginationController, SlicingListener,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn hundred_records_fit_in_one_bar() -> Result<()> {
    init_logging();

    let config = PaginationConfig::try_new(100, 18, 1)?;
    assert_eq!(config.total_pages(), 6);

    let controller = PaginationController::new(config);
    let expected: Vec<_> = (1..=6).map(PageToken::page).collect();
    assert_eq!(controller.current_window().tokens(), expected.as_slice());
    Ok(())
}

#[test]
fn five_hundred_records_truncate_around_page_fifteen() -> Result<()> {
    init_logging();

    let config = PaginationConfig::try_new(500, 18, 1)?;
    let mut controller = PaginationController::new(config);
    controller.goto(15);

    assert_eq!(controller.total_pages(), 28);
    assert_eq!(
        controller.current_window().tokens(),
        &[
            PageToken::page(1),
            PageToken::LeftEllipsis,
            PageToken::page(14),
            PageToken::page(15),
            PageToken::page(16),
            PageToken::RightEllipsis,
            PageToken::page(28),
        ]
    );
    Ok(())
}

#[test]
fn exactly_one_page_shows_everything() -> Result<()> {
    init_logging();

    let records: Vec<String> = (0..18).map(|i| format!("country-{i}")).collect();
    let controller = SlicingListener::new(records.clone()).paginate(18, 1)?;

    assert_eq!(controller.total_pages(), 1);
    assert_eq!(controller.listener().visible(), records.as_slice());
    assert_eq!(
        DataSlicer::slice(&records, &controller.event()),
        records.as_slice()
    );
    Ok(())
}

#[test]
fn walking_the_bar_by_markers() -> Result<()> {
    init_logging();

    let config = PaginationConfig::try_new(500, 18, 1)?;
    let mut controller = PaginationController::new(config);
    let mut visited = vec![controller.current_page()];

    // Keep clicking the right marker until it disappears
    while let Some(marker) = controller
        .current_window()
        .tokens()
        .iter()
        .copied()
        .find(|token| *token == PageToken::RightEllipsis)
    {
        controller.navigate(marker.navigation());
        visited.push(controller.current_page());
    }

    let visited: Vec<usize> = visited.into_iter().map(PageNumber::value).collect();
    assert_eq!(visited, vec![1, 4, 7, 10, 13, 16, 19, 22, 25, 28]);
    assert!(!controller.current_window().has_right_spill());
    Ok(())
}

#[test]
fn no_records_render_nothing() -> Result<()> {
    init_logging();

    let controller = SlicingListener::<String>::new(Vec::new()).paginate(18, 1)?;
    assert!(controller.current_window().is_empty());
    assert!(controller.listener().last_event().is_none());
    Ok(())
}

#[test]
fn zero_page_limit_is_rejected() {
    assert!(PaginationConfig::try_new(100, 0, 1).is_err());
    assert!(SlicingListener::new(vec![1, 2, 3]).paginate(0, 0).is_err());
}
