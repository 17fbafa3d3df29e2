//! On-screen presentation of the raster canvas.
//!
//! The canvas is shown 1:1 as a sprite texture. Pixels are copied into the
//! texture only when the canvas has been flushed since the last upload.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::input::{expose_on_startup, expose_on_visibility, terminate_on_input};
use crate::surface::{Canvas, ColorKey, Palette};
use crate::types::DiagramSystemSet;

/// Color depth of the canvas texture, in bits per pixel.
pub const CANVAS_DEPTH_BITS: u32 = 32;

/// Plugin showing the canvas in the primary window.
pub struct CanvasDisplayPlugin;

impl Plugin for CanvasDisplayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_canvas_sprite, expose_on_startup).chain())
            .add_systems(
                Update,
                (
                    (terminate_on_input, expose_on_visibility).in_set(DiagramSystemSet::Input),
                    upload_canvas.in_set(DiagramSystemSet::Upload),
                ),
            );
    }
}

/// Texture the canvas is uploaded into.
#[derive(Resource)]
pub struct CanvasTexture {
    pub handle: Handle<Image>,
    /// Canvas generation last copied into the texture.
    pub uploaded_generation: u64,
}

fn canvas_image(canvas: &Canvas) -> Image {
    Image::new(
        Extent3d {
            width: canvas.width(),
            height: canvas.height(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        canvas.as_bytes().to_vec(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    )
}

fn spawn_canvas_sprite(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    canvas: Res<Canvas>,
    palette: Res<Palette>,
) {
    commands.insert_resource(ClearColor(palette.bevy_color(ColorKey::Background)));
    commands.spawn(Camera2d);

    let handle = images.add(canvas_image(&canvas));
    commands.spawn(Sprite::from_image(handle.clone()));
    commands.insert_resource(CanvasTexture {
        handle,
        uploaded_generation: canvas.generation(),
    });

    info!("Canvas sprite spawned ({}x{})", canvas.width(), canvas.height());
}

fn upload_canvas(
    canvas: Res<Canvas>,
    mut texture: ResMut<CanvasTexture>,
    mut images: ResMut<Assets<Image>>,
) {
    if canvas.generation() == texture.uploaded_generation {
        return;
    }
    let Some(mut image) = images.get_mut(&texture.handle) else {
        warn!("Canvas texture missing, skipping upload");
        return;
    };
    image.data = Some(canvas.as_bytes().to_vec());
    texture.uploaded_generation = canvas.generation();
}
