use woah_core::data_home::find_data_home;
use woah_util::errors::WoahResult;

pub fn exec() -> WoahResult<()> {
    println!("{}", find_data_home());
    Ok(())
}
