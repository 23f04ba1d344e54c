use agdeck_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel,
};

pub fn present_config(
    data_dir: &Path,
    config_path: &Path,
    config: Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let exists = config_path.exists();
    let content = ConfigViewModel {
        data_dir: data_dir.to_path_buf(),
        path: config_path.to_path_buf(),
        exists,
        config,
    };

    if exists {
        CommandResultViewModel::plain(content)
    } else {
        CommandResultViewModel::info(content, "No config file, showing defaults")
            .with_tip("Create one", "agdeck config init")
    }
}

pub fn present_config_init(
    config_path: &Path,
    overwritten: bool,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let content = ConfigInitViewModel {
        path: config_path.to_path_buf(),
        overwritten,
    };
    CommandResultViewModel::success(content, "Config written")
        .with_tip("Review it", "agdeck config show")
}
