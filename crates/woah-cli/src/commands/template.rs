use woah_core::data_home::find_data_home;
use woah_core::repository::Repository;
use woah_util::errors::WoahResult;

pub fn exec(url: &str) -> WoahResult<()> {
    let repo = Repository::parse(url)?;
    let destination = repo.destination(&find_data_home());
    tracing::debug!(host = %repo.host, %destination, "resolved template destination");

    println!("{repo} -> {destination}");
    Ok(())
}
