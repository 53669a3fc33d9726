use aksaraya_client::api::CatalogApi;
use aksaraya_client::wishlist::{WishlistAction, toggle_wishlist};
use aksaraya_client::{ClientError, FallbackMessage};

use crate::cli::{CatalogIdArgs, OutputFormat};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_wishlist;

pub(crate) fn handle_wishlist_list(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let session = ctx.session();
    let user = session
        .user()
        .ok_or_else(|| CliError::from(ClientError::Unauthenticated))?;
    render_wishlist(&user.wishlists, format)
}

pub(crate) async fn handle_wishlist_add(ctx: &AppContext, args: CatalogIdArgs) -> CliResult<()> {
    apply(ctx, args, Some(WishlistAction::Add)).await
}

pub(crate) async fn handle_wishlist_remove(
    ctx: &AppContext,
    args: CatalogIdArgs,
) -> CliResult<()> {
    apply(ctx, args, Some(WishlistAction::Remove)).await
}

pub(crate) async fn handle_wishlist_toggle(
    ctx: &AppContext,
    args: CatalogIdArgs,
) -> CliResult<()> {
    apply(ctx, args, None).await
}

/// Toggle membership of `args.id`; with `wanted` set, only act when the
/// toggle would move membership in that direction.
async fn apply(
    ctx: &AppContext,
    args: CatalogIdArgs,
    wanted: Option<WishlistAction>,
) -> CliResult<()> {
    let mut session = ctx.session();
    let user = session
        .user()
        .ok_or_else(|| CliError::from(ClientError::Unauthenticated))?;

    let pending = WishlistAction::for_user(user, args.id);
    if let Some(wanted) = wanted.filter(|wanted| *wanted != pending) {
        match wanted {
            WishlistAction::Add => println!("Catalog {} is already in the wishlist", args.id),
            WishlistAction::Remove => println!("Catalog {} is not in the wishlist", args.id),
        }
        return Ok(());
    }

    let catalog = ctx.api.get_catalog(args.id).await.map_err(CliError::from)?;
    let action = toggle_wishlist(&ctx.api, &mut session, &catalog)
        .await
        .map_err(|err| CliError::from_client(&err, FallbackMessage::Wishlist))?;

    match action {
        WishlistAction::Add => println!("Added \"{}\" to the wishlist", catalog.title),
        WishlistAction::Remove => println!("Removed \"{}\" from the wishlist", catalog.title),
    }
    Ok(())
}
