use prisma_select_cli::PrismaSelectCli;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    PrismaSelectCli::new().parse_and_run()?;
    Ok(())
}
