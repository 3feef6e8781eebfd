use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scenetag_core::{Registry, RuleSets, parse_numeral};

fn bench_find_properties(c: &mut Criterion) {
    let registry = Registry::standard().unwrap();

    let inputs = vec![
        "Movie.720p.BluRay.x264-GROUP",
        "The.Show.S01E02.1080p.WEB-DL.DD5.1.H.264-CtrlHD",
        "Film.2009.LIMITED.DVDRip.XviD-DiRTY",
        "Serie.Saison.deux.Episode.trois.FRENCH.HDTV",
        "Avatar.2009.3D.1080p.BluRay.DTS.x264-ESiR",
    ];

    c.bench_function("find_properties_single", |b| {
        b.iter(|| registry.find_properties(black_box(inputs[0])));
    });

    c.bench_function("find_properties_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = registry.find_properties(black_box(input));
            }
        });
    });
}

fn bench_rules(c: &mut Criterion) {
    let rules = RuleSets::new().unwrap();

    c.bench_function("detect_episode", |b| {
        b.iter(|| rules.detect_episode(black_box("The.Show.S01E02.1080p.WEB-DL")).unwrap());
    });

    c.bench_function("video_rules_all", |b| {
        b.iter(|| rules.video.matches(black_box("Film.Collector.Edition.CD1.of.2.1280x720")));
    });
}

fn bench_parse_numeral(c: &mut Criterion) {
    c.bench_function("parse_numeral_mixed", |b| {
        b.iter(|| {
            for token in ["13", "MCMXCIX", "dix-sept", "twenty"] {
                let _ = parse_numeral(black_box(token)).unwrap();
            }
        });
    });
}

criterion_group!(benches, bench_find_properties, bench_rules, bench_parse_numeral);
criterion_main!(benches);
