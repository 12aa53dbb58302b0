use anyhow::{anyhow, Result};
use platform_config::{
    codegen::generate_modules, platform::Platform, Configuration, SAMPLE_CONFIGURATION_DIRECTORY,
};
use std::{
    env,
    fs::File,
    io::{BufReader, Read},
    path::PathBuf,
};

fn main() -> Result<()> {
    let output = PathBuf::from(env::var("OUT_DIR")?);
    let bare_metal = env::var("CARGO_CFG_TARGET_OS").map(|os| os == "none").unwrap_or(false);

    let platform = Platform::from_features(cfg!(feature = "am243x"), cfg!(feature = "tms570"));
    let configuration = read_configuration_file(platform)?;
    validate_feature_flags_against_configuration(platform, &configuration);

    let issues: Vec<String> = configuration.issues(bare_metal).map(|i| i.to_string()).collect();
    if !issues.is_empty() {
        return Err(anyhow!("Invalid configuration:\n{}", issues.join("\n")));
    }

    generate_modules(&output, &configuration, bare_metal)?;

    if bare_metal {
        println!("cargo:rustc-link-search={}", output.display());
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
    }
    Ok(())
}

fn read_configuration_file(platform: Platform) -> Result<Configuration> {
    let default_filename = format!(
        "./platform_config/{}/{}",
        SAMPLE_CONFIGURATION_DIRECTORY,
        platform.sample_configuration_filename()
    );
    println!("cargo:rerun-if-env-changed=BARE_START_CONFIG");
    println!("cargo:rerun-if-changed={}", default_filename);

    let filename = if let Ok(filename) = env::var("BARE_START_CONFIG") {
        println!("cargo:rerun-if-changed={}", filename);
        filename
    } else {
        default_filename
    };

    let file = File::open(&filename)?;
    let mut buf_reader = BufReader::new(file);
    let mut contents = String::new();
    buf_reader.read_to_string(&mut contents)?;
    Ok(ron::from_str(&contents)?)
}

fn validate_feature_flags_against_configuration(platform: Platform, configuration: &Configuration) {
    assert_eq!(platform, configuration.platform,
        "Mismatching platform in configuration file. Features require {}, configuration requires {}",
         platform,
         configuration.platform);
}
