use crate::display_core::sample::Representation;
use crate::display_core::slider::{SliderValueMapper, ToneSliderScales};

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "{} != {}", actual, expected);
}

#[test]
fn test_data_domain_scale() {
    let mapper = SliderValueMapper::for_data_domain(0.0, 4095.0, 0..=4095).unwrap();
    assert_eq!(mapper.scale(), 1.0);
    assert_eq!(mapper.offset(), 0.0);
    assert_eq!(mapper.to_continuous(10), 10.0);
    assert_eq!(mapper.to_slider(4095.0), 4095);

    let mapper = SliderValueMapper::for_data_domain(100.0, 65635.0, 1..=65536).unwrap();
    assert_eq!(mapper.scale(), 1.0);
    assert_eq!(mapper.to_continuous(1), 100.0);
}

#[test]
fn test_slider_positions_round_trip() {
    let mapper = SliderValueMapper::for_data_domain(12.5, 70000.3, 0..=1000).unwrap();

    for position in 0..=1000 {
        assert_eq!(mapper.to_slider(mapper.to_continuous(position)), position);
    }

    let mut value = 12.5;
    while value <= 70000.3 {
        let position = mapper.to_slider(value);
        assert!(mapper.contains(position) || position == 1000);
        assert!((mapper.to_continuous(position) - value).abs() <= mapper.scale() / 2.0 + 1e-9);
        value += 137.25;
    }
}

#[test]
fn test_to_slider_is_not_clamped() {
    let mapper = SliderValueMapper::for_data_domain(0.0, 255.0, 0..=255).unwrap();

    assert_eq!(mapper.to_slider(1000.0), 1000);
    assert_eq!(mapper.to_slider(-20.0), -20);
    assert!(!mapper.contains(1000));
}

#[test]
fn test_gamma_slider() {
    let gamma = SliderValueMapper::linear(0.1, 0.1, 1..=100).unwrap();

    assert_eq!(gamma.to_continuous(1), 0.1);
    assert_eq!(gamma.to_continuous(10), 1.0);
    assert_eq!(gamma.to_slider(1.0), 10);
    assert_close(gamma.to_continuous(100), 10.0);
}

#[test]
fn test_invalid_domains_rejected() {
    assert!(SliderValueMapper::for_data_domain(0.0, 10.0, 10..=0).is_err());
    assert!(SliderValueMapper::for_data_domain(5.0, 4.0, 0..=10).is_err());
    assert!(SliderValueMapper::for_data_domain(f64::NAN, 4.0, 0..=10).is_err());
    assert!(SliderValueMapper::linear(0.0, 0.0, 0..=10).is_err());
}

#[test]
fn test_rebind() {
    let mut mapper = SliderValueMapper::for_data_domain(0.0, 255.0, 0..=255).unwrap();
    mapper.rebind(0.0, 4095.0, 0..=255).unwrap();

    assert_eq!(mapper.scale(), 16.0);
    assert_eq!(mapper.to_slider(4095.0), 256);

    assert!(mapper.rebind(3.0, 2.0, 0..=255).is_err());
    assert_eq!(mapper.scale(), 16.0);
}

#[test]
fn test_tone_scales_per_representation() {
    let full = [10000; 3];

    let wide = ToneSliderScales::for_representation(Representation::U16, full).unwrap();
    let (i_max, lambda, mu) = wide.to_parameters(full);
    assert_close(i_max, 0.5);
    assert_close(lambda, 5.0);
    assert_close(mu, 1.0);

    let narrow = ToneSliderScales::for_representation(Representation::U8, full).unwrap();
    let (i_max, lambda, mu) = narrow.to_parameters(full);
    assert_close(i_max, 10000.0);
    assert_close(lambda, 2000.0);
    assert_close(mu, 255.0);
    assert_eq!(narrow.to_positions(5000.0, 1000.0, 127.5), [5000; 3]);

    let signed = ToneSliderScales::for_representation(Representation::I16, full).unwrap();
    assert_eq!(signed.to_parameters([3, 4, 5]), (3.0, 4.0, 5.0));
}
