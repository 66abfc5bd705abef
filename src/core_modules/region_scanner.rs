// THEORY:
// The `RegionScanner` is the engine of the spatial layer. It performs
// exhaustive connected-component labeling over the pixel grid, with the
// `ColorSpec` as the membership predicate, and yields one bounding box per
// component of marker-colored pixels.
//
// Key architectural principles & algorithm steps:
// 1.  **Exhaustive row-major sweep**: Every pixel is considered exactly once,
//     top-to-bottom then left-to-right. A non-matching pixel is marked visited
//     and skipped; a matching, unvisited pixel seeds a new component. Because
//     seeds are discovered in sweep order, the emitted boxes inherit a stable
//     top-to-bottom ordering that the interaction layer reuses as the
//     per-region analytics index.
// 2.  **Seeded breadth-first growth**: From each seed the scanner grows the
//     component over 4-connected neighbors (up/down/left/right only; diagonal
//     chains of antialiased pixels must not bridge two separate buttons). The
//     worklist is an explicit array-backed queue of flat indices, never
//     recursion: a full-canvas component on a large raster would otherwise
//     exhaust the call stack.
// 3.  **Visit-once accounting**: Every inspected neighbor is marked visited
//     whether or not it matches, so each pixel is enqueued at most once across
//     the whole image and the scan stays O(width * height) in time and space
//     regardless of how many components exist.
// 4.  **Bounding-box aggregation**: The component's running min/max x and y
//     over its matching pixels become the emitted box. Interior holes are
//     deliberately swallowed; a button with antialiased text punched out of it
//     is still one button.
// 5.  **Stateless utility**: `scan` takes one buffer and one spec and returns
//     boxes for that buffer. It has no memory between runs; caching is the
//     session's concern.

use crate::core_modules::color_matcher::ColorSpec;
use crate::core_modules::pixel_buffer::PixelBuffer;
use crate::core_modules::region::Rect;

pub mod region_scanner {
    use super::*;

    /// The main function of the spatial layer. Finds the bounding box of every
    /// 4-connected component of pixels matching `spec`, in row-major order of
    /// each component's first-visited pixel.
    pub fn scan(buffer: &PixelBuffer, spec: &ColorSpec) -> Vec<Rect> {
        let width = buffer.width() as usize;
        let height = buffer.height() as usize;
        let mut visited = vec![false; width * height];
        let mut regions: Vec<Rect> = Vec::new();

        for y in 0..height {
            for x in 0..width {
                let index = y * width + x;
                if visited[index] {
                    continue;
                }
                if !spec.matches(buffer.rgb_at(x as u32, y as u32)) {
                    // Not the start of a region, and never worth revisiting.
                    visited[index] = true;
                    continue;
                }
                regions.push(grow_region(buffer, spec, &mut visited, x, y));
            }
        }

        regions
    }

    /// Breadth-first growth from an unvisited matching seed. The queue holds
    /// flat `y * width + x` indices; a head cursor turns the Vec into a FIFO
    /// without any pop-front shuffling.
    fn grow_region(
        buffer: &PixelBuffer,
        spec: &ColorSpec,
        visited: &mut [bool],
        seed_x: usize,
        seed_y: usize,
    ) -> Rect {
        let width = buffer.width() as usize;
        let height = buffer.height() as usize;

        let seed = seed_y * width + seed_x;
        visited[seed] = true;
        let mut queue: Vec<usize> = vec![seed];
        let mut head = 0;

        let (mut min_x, mut max_x) = (seed_x, seed_x);
        let (mut min_y, mut max_y) = (seed_y, seed_y);

        while head < queue.len() {
            let current = queue[head];
            head += 1;
            let cx = current % width;
            let cy = current / width;

            min_x = min_x.min(cx);
            max_x = max_x.max(cx);
            min_y = min_y.min(cy);
            max_y = max_y.max(cy);

            // The 4 direct neighbors (no diagonals).
            for (dx, dy) in [(1isize, 0isize), (-1, 0), (0, 1), (0, -1)] {
                let nx = cx as isize + dx;
                let ny = cy as isize + dy;
                if nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize {
                    continue;
                }
                let neighbor = ny as usize * width + nx as usize;
                if visited[neighbor] {
                    continue;
                }
                // Marked either way: each pixel is inspected exactly once for
                // the whole scan.
                visited[neighbor] = true;
                if spec.matches(buffer.rgb_at(nx as u32, ny as u32)) {
                    queue.push(neighbor);
                }
            }
        }

        Rect {
            left: min_x as u32,
            top: min_y as u32,
            width: (max_x - min_x + 1) as u32,
            height: (max_y - min_y + 1) as u32,
        }
    }
}
