use std::path::Path;

pub const IO_BUFFER_SIZE: usize = 64 * 1024; // 64kb

pub fn async_file_writer<W>(w: W) -> tokio::io::BufWriter<W>
where
    W: tokio::io::AsyncWrite,
{
    tokio::io::BufWriter::with_capacity(IO_BUFFER_SIZE, w)
}

#[cfg(unix)]
pub async fn set_world_read_write(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o666)).await
}

#[cfg(not(unix))]
pub async fn set_world_read_write(path: &Path) -> std::io::Result<()> {
    let mut permissions = tokio::fs::metadata(path).await?.permissions();
    #[allow(clippy::permissions_set_readonly_false)]
    permissions.set_readonly(false);
    tokio::fs::set_permissions(path, permissions).await
}

pub async fn get_local_file_content(path: &Path) -> std::io::Result<String> {
    tokio::fs::read_to_string(path).await
}
