#[cfg(test)]
mod tests {
    use std::path::Path;

    use test_case::test_case;

    use optimalbins::config::PackConfig;
    use optimalbins::io::svg::bin_to_svg;
    use optimalbins_cli::config::CliConfig;
    use optimalbins_cli::io;
    use optimalbins_cli::io::output::Output;

    const DEMO: &str = "../assets/demo.json";

    fn cli_config(algorithm: &str, heuristic: Option<&str>) -> CliConfig {
        CliConfig {
            pack_config: PackConfig {
                algorithm: algorithm.to_string(),
                heuristic: heuristic.map(str::to_string),
                ..PackConfig::default()
            },
            ..CliConfig::default()
        }
    }

    #[test_case("first_fit", None; "first_fit")]
    #[test_case("bottom_left", None; "bottom_left")]
    #[test_case("guillotine", Some("longer"); "guillotine")]
    #[test_case("max_rects", Some("contact_point_rule"); "max_rects")]
    fn solve_demo_instance(algorithm: &str, heuristic: Option<&str>) {
        let ext_instance = io::read_instance(Path::new(DEMO)).unwrap();
        let config = cli_config(algorithm, heuristic);
        let (result, solution) = optimalbins_cli::solve(&ext_instance, &config).unwrap();

        assert_eq!(result.n_items(), ext_instance.items.len());
        assert_eq!(solution.n_bins, result.n_bins());
        assert_eq!(solution.layouts.len(), result.n_bins());
        assert_eq!(solution.metrics.algorithm, algorithm);

        // the solution file round trips through serde
        let output = Output {
            instance: ext_instance,
            solution,
            config,
        };
        let json = serde_json::to_string(&output).unwrap();
        let parsed: Output = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.config, output.config);
        assert_eq!(parsed.instance.items.len(), output.instance.items.len());

        for bin in &result.bins {
            let svg = bin_to_svg(bin, output.config.svg_draw_options).to_string();
            assert!(svg.contains("viewBox"));
        }
    }

    #[test]
    fn demo_config_file() {
        let config = io::read_config(Path::new("../assets/config.json")).unwrap();
        assert_eq!(config.pack_config.algorithm, "max_rects");
        assert_eq!(config.pack_config.heuristic.as_deref(), Some("best_area_fit"));
        assert!(config.svg_draw_options.free_rects);
    }

    #[test]
    fn unknown_algorithm_in_config() {
        let ext_instance = io::read_instance(Path::new(DEMO)).unwrap();
        let config = cli_config("skyline", None);
        let err = optimalbins_cli::solve(&ext_instance, &config).unwrap_err();
        assert!(err.to_string().contains("unknown algorithm: skyline"));
    }

    #[test]
    fn missing_instance_file() {
        let err = io::read_instance(Path::new("../assets/missing.json")).unwrap_err();
        assert!(err.to_string().contains("could not open instance file"));
    }
}
