use super::*;

#[test]
fn cycles_through_styles_every_period() {
    let mut cycler = StyleCycler::new(LogoStyle::MarkOnly, DEFAULT_PERIOD, Duration::ZERO).unwrap();
    let mut rx = cycler.subscribe();

    assert_eq!(cycler.advance_to(Duration::from_millis(2999)), 0);
    assert!(!rx.has_changed().unwrap());

    let expected = [
        LogoStyle::Horizontal,
        LogoStyle::Stacked,
        LogoStyle::MarkOnly,
        LogoStyle::Horizontal,
    ];
    for (i, want) in expected.into_iter().enumerate() {
        let now = Duration::from_secs(3 * (i as u64 + 1));
        assert_eq!(cycler.advance_to(now), 1);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), want);
    }
}

#[test]
fn catching_up_fires_every_missed_tick() {
    let mut cycler = StyleCycler::new(LogoStyle::MarkOnly, DEFAULT_PERIOD, Duration::ZERO).unwrap();
    let rx = cycler.subscribe();
    assert_eq!(cycler.advance_to(Duration::from_secs(7)), 2);
    assert_eq!(*rx.borrow(), LogoStyle::Stacked);
    assert_eq!(cycler.advance_to(Duration::from_secs(8)), 0);
}

#[test]
fn dropping_cycler_closes_channel() {
    let cycler = StyleCycler::new(LogoStyle::Stacked, DEFAULT_PERIOD, Duration::ZERO).unwrap();
    let rx = cycler.subscribe();
    assert!(rx.has_changed().is_ok());
    drop(cycler);
    assert!(rx.has_changed().is_err());
    assert_eq!(*rx.borrow(), LogoStyle::Stacked);
}

#[test]
fn publishing_without_subscribers_is_fine() {
    let mut cycler = StyleCycler::new(LogoStyle::MarkOnly, DEFAULT_PERIOD, Duration::ZERO).unwrap();
    cycler.advance_to(Duration::from_secs(3));
    assert_eq!(cycler.current(), LogoStyle::Horizontal);
}

#[test]
fn zero_period_is_rejected() {
    let err = StyleCycler::new(LogoStyle::MarkOnly, Duration::ZERO, Duration::ZERO).unwrap_err();
    assert!(matches!(err, LogoError::Validation(_)));
}
