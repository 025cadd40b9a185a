#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use unitstr::UnitString;

#[derive(Arbitrary, Debug)]
enum Op {
    AssignFilled { unit: u8, count: u8 },
    AssignUnits(Vec<u8>),
    AppendFilled { unit: u8, count: u8 },
    PushUnits(Vec<u8>),
    Push(u8),
    Clear,
    MakeUpper,
    MakeLower,
    Substring { start: u8, count: u8 },
    IndexOf(u8),
    IndexOfUnits(Vec<u8>),
    Clone,
}

fn strip(units: &[u8]) -> &[u8] {
    match units.split_last() {
        Some((&0, content)) => content,
        _ => units,
    }
}

fn check(subject: &UnitString<u8>, model: &[u8]) {
    assert_eq!(subject.len(), model.len());
    assert_eq!(subject.as_units(), model);
    match subject.as_terminated() {
        Some(terminated) => {
            assert_eq!(terminated.len(), subject.len() + 1);
            assert_eq!(terminated[subject.len()], 0);
        }
        None => {
            assert_eq!(subject.capacity(), 0);
            assert_eq!(subject.len(), 0);
        }
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut subject = UnitString::<u8>::new();
    let mut model: Vec<u8> = Vec::new();
    let mut watermark = 0_usize;

    for op in &ops {
        match op {
            Op::AssignFilled { unit, count } => {
                subject.assign_filled(*unit, usize::from(*count));
                model = vec![*unit; usize::from(*count)];
            }
            Op::AssignUnits(units) => {
                subject.assign_units(units);
                model = strip(units).to_vec();
            }
            Op::AppendFilled { unit, count } => {
                subject.append_filled(*unit, usize::from(*count));
                model.resize(model.len() + usize::from(*count), *unit);
            }
            Op::PushUnits(units) => {
                subject.push_units(units);
                model.extend_from_slice(strip(units));
            }
            Op::Push(unit) => {
                subject.push(*unit);
                model.push(*unit);
            }
            Op::Clear => {
                subject.clear();
                model.clear();
            }
            Op::MakeUpper => {
                subject.make_upper();
                for unit in model.iter_mut() {
                    if *unit == 0 {
                        break;
                    }
                    *unit = unit.to_ascii_uppercase();
                }
            }
            Op::MakeLower => {
                subject.make_lower();
                for unit in model.iter_mut() {
                    if *unit == 0 {
                        break;
                    }
                    *unit = unit.to_ascii_lowercase();
                }
            }
            Op::Substring { start, count } => {
                let start = usize::from(*start);
                let count = usize::from(*count);
                if start < subject.len() {
                    let sub = subject.substring(start..start + count);
                    let expected: Vec<u8> = model[start..]
                        .iter()
                        .copied()
                        .take(count)
                        .take_while(|&unit| unit != 0)
                        .collect();
                    check(&sub, &expected);
                }
            }
            Op::IndexOf(unit) => {
                let expected = model.iter().position(|u| u == unit);
                assert_eq!(subject.index_of(*unit), expected);
            }
            Op::IndexOfUnits(needle) => {
                let expected = if needle.is_empty() {
                    Some(0)
                } else if needle.len() > model.len() {
                    None
                } else {
                    model.windows(needle.len()).position(|w| w == needle)
                };
                assert_eq!(subject.index_of_units(needle), expected);
            }
            Op::Clone => {
                let copy = subject.clone();
                assert_eq!(copy, subject);
                assert_eq!(copy.capacity(), subject.capacity());
                check(&copy, &model);
            }
        }

        check(&subject, &model);
        assert!(subject.capacity() >= watermark, "capacity shrank");
        watermark = subject.capacity();
    }
});
