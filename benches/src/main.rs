use std::collections::{BTreeSet, HashMap};
use std::env;
use std::fs;

/// выведем результаты бенчмарка как CSV: строки - шрифты, столбцы - варианты
fn main()
{
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Использование: {} <имя файла>", args[0]);
        return;
    }

    let contents = match fs::read_to_string(&args[1]) {
        Ok(contents) => contents,
        Err(_) => {
            println!("Не удалось прочитать файл.");
            return;
        }
    };

    for group in ["scan", "lookup"] {
        println!("{}:\n{}\n", group.to_uppercase(), make_csv(&contents, group));
    }
}

fn make_csv(source: &str, group: &str) -> String
{
    let source = parse_str(source, group);

    let fonts: BTreeSet<&str> = source.keys().map(|(_, font)| font.as_str()).collect();
    let variants: BTreeSet<&str> = source.keys().map(|(variant, _)| variant.as_str()).collect();

    let mut result = String::new();

    for variant in variants.iter() {
        result.push_str(&format!(";{}", variant));
    }
    result.push('\n');

    for font in fonts.iter() {
        result.push_str(font);

        for variant in variants.iter() {
            let value = source
                .get(&(variant.to_string(), font.to_string()))
                .unwrap_or(&0);

            result.push_str(&format!(";{}", value));
        }

        result.push('\n');
    }

    result
}

/// строки вида "scan/scan_all/latin1  time:  [1.2 µs 1.3 µs 1.4 µs]" -> медиана в наносекундах
fn parse_str(source: &str, group: &str) -> HashMap<(String, String), u64>
{
    let mut result = HashMap::new();

    for line in source.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.len() < 6 || parts[1] != "time:" {
            continue;
        }

        let name: Vec<&str> = parts[0].split('/').collect();

        if name.len() != 3 || name[0] != group {
            continue;
        }

        let time = match parts[4].parse::<f64>() {
            Ok(time) => time,
            Err(_) => continue,
        };

        let multiplier = match parts[5] {
            "ns" => 1.0,
            "µs" | "us" => 1_000.0,
            "ms" => 1_000_000.0,
            "s" => 1_000_000_000.0,
            _ => continue,
        };

        result.insert(
            (name[1].to_owned(), name[2].to_owned()),
            (time * multiplier).trunc() as u64,
        );
    }

    result
}
